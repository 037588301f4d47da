use thiserror::Error;
use url::Url;

/// Errors produced when validating the backend base URL.
#[derive(Error, Debug)]
pub enum BaseUrlError {
    /// The string could not be parsed as an absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    /// The URL has no host component.
    #[error("Base URL has no host")]
    MissingHost,
    /// Query strings and fragments would be clobbered by endpoint paths.
    #[error("Base URL must not carry a query or fragment")]
    HasQueryOrFragment,
}

/// Validates and normalizes the storefront backend base URL.
///
/// The shop backend usually runs on the developer's machine
/// (`http://localhost:8080`), so there is no loopback or
/// private-range restriction. The checks only guarantee the value can be
/// used as a join base:
///
/// - scheme is `http` or `https`
/// - a host is present
/// - no query string or fragment
///
/// The returned URL always ends its path with `/`, so `Url::join` with a
/// relative endpoint path appends to it rather than replacing the last
/// segment (`http://host/shop` → `http://host/shop/`).
///
/// # Examples
///
/// ```
/// use shopnav::util::validate_base_url;
///
/// let url = validate_base_url("https://shop.example.com/backend").unwrap();
/// assert_eq!(url.as_str(), "https://shop.example.com/backend/");
///
/// assert!(validate_base_url("ftp://shop.example.com").is_err());
/// assert!(validate_base_url("not a url").is_err());
/// ```
pub fn validate_base_url(url_str: &str) -> Result<Url, BaseUrlError> {
    let mut url = Url::parse(url_str.trim())?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(BaseUrlError::UnsupportedScheme(scheme.to_owned())),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(BaseUrlError::MissingHost),
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(BaseUrlError::HasQueryOrFragment);
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
