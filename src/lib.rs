//! Terminal navigation header for a multi-vendor shop storefront.
//!
//! The header shows a brand, a "Category" dropdown populated from the shop
//! backend once per mount, static About/Contact links, and a role-dependent
//! link block. See [`menu::CategoryMenuLoader`] for the fetch-on-mount
//! lifecycle and [`catalog::CategoryClient`] for the backend request.

pub mod app;
pub mod catalog;
pub mod config;
pub mod menu;
pub mod nav;
pub mod theme;
pub mod ui;
pub mod util;
