//! Storefront catalog access.
//!
//! The shop backend exposes categories through a paginated REST endpoint
//! wrapped in the common `{ ..., responseMessage, success }` envelope.
//!
//! - [`types`] - wire types (`Category`, `CategoryId`, the response envelope)
//! - [`client`] - HTTP client with timeout, size cap and typed errors
//!
//! # Example
//!
//! ```ignore
//! use shopnav::catalog::{CategoryClient, CategoryWindow};
//!
//! let client = CategoryClient::new(base_url, Duration::from_secs(30))?;
//! let categories = client.fetch_categories(CategoryWindow::HEADER).await?;
//! ```

mod client;
mod types;

pub use client::{CategoryClient, FetchError, CATEGORY_ENDPOINT};
pub use types::{Category, CategoryEnvelope, CategoryId, CategoryWindow};
