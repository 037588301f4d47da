//! Utility functions shared across the crate.
//!
//! - **Text**: label sanitizing and Unicode-aware truncation for terminal output
//! - **URLs**: validation of the configured backend base URL
//! - **Tasks**: panic capture for spawned background work
//!
//! # Examples
//!
//! ```
//! use shopnav::util::{sanitize_label, truncate_to_width, validate_base_url};
//!
//! assert_eq!(sanitize_label("\x1b[31mBooks\x1b[0m"), "Books");
//! assert_eq!(truncate_to_width("Electronics", 8), "Elect...");
//!
//! let base = validate_base_url("http://localhost:8080").unwrap();
//! assert_eq!(base.as_str(), "http://localhost:8080/");
//! ```

mod base_url;
mod task;
mod text;

pub use base_url::{validate_base_url, BaseUrlError};
pub use task::catch_task_panic;
pub use text::{display_width, sanitize_label, truncate_to_width};
