use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use shopnav::app::{App, AppEvent, AppSettings};
use shopnav::catalog::CategoryClient;
use shopnav::config::Config;
use shopnav::nav::Role;
use shopnav::theme::ThemeVariant;
use shopnav::ui;

/// Get the default config file path (~/.config/shopnav/config.toml)
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("shopnav")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "shopnav", about = "Terminal navigation header for a multi-vendor shop")]
struct Args {
    /// Config file (default: ~/.config/shopnav/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Shop backend base URL (overrides config and SHOPNAV_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Role for the navigation links: guest, customer, seller, delivery, admin
    #[arg(long, value_name = "ROLE")]
    role: Option<String>,

    /// Theme: dark or light
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,

    /// Write logs to this file instead of stderr.
    ///
    /// Stderr shares the terminal with the header, so with RUST_LOG set
    /// either pass this flag or redirect stderr (2>shopnav.log).
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

/// Initialize tracing. The TUI owns stdout, so logs go to stderr or a file.
///
/// Without a log file only errors reach stderr unless RUST_LOG asks for
/// more, and a warning before the alternate screen opens points at
/// `--log-file`.
fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            if std::env::var_os("RUST_LOG").is_some() {
                eprintln!("shopnav: RUST_LOG is set; use --log-file to keep logs off the header");
            }
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_ref())?;

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config '{}'", config_path.display()))?;

    // Precedence: CLI flag > environment > file > default
    config.apply_env();
    if let Some(url) = args.api_url {
        config.api_base_url = url;
    }

    let base_url = config.base_url()?;
    let role = match args.role.as_deref() {
        Some(name) => Role::from_str_name(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown role '{}'", name))?,
        None => config.role()?,
    };
    let theme = match args.theme.as_deref() {
        Some(name) => ThemeVariant::from_str_name(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown theme '{}'", name))?,
        None => config.theme_variant()?,
    };

    tracing::info!(
        api_base_url = %base_url,
        role = role.name(),
        theme = theme.name(),
        "Starting shopnav"
    );

    let client = CategoryClient::new(&base_url, config.request_timeout())
        .context("Failed to create HTTP client")?;

    let mut app = App::new(
        client,
        AppSettings {
            brand: config.brand,
            role,
            theme,
        },
    );

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "shopnav",
            "--role",
            "delivery",
            "--log-file",
            "/tmp/shopnav.log",
        ])
        .unwrap();
        assert_eq!(args.role.as_deref(), Some("delivery"));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/shopnav.log")));
    }

    #[test]
    fn test_log_file_help_mentions_stderr_redirect() {
        let help = Args::command().render_long_help().to_string();
        assert!(help.contains("--log-file"));
        assert!(help.contains("2>shopnav.log"));
    }
}
