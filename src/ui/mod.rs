//! Terminal User Interface module.
//!
//! Draws the storefront navigation header (brand, category dropdown, static
//! links, role links) above a page body naming the active route.
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - Layout and render dispatch
//! - `header` - Navigation header widget (wide and collapsed)
//! - `categories` - Category dropdown widget
//! - `page` - Active route body
//! - `status` - Status bar widget

mod categories;
mod events;
mod header;
mod input;
mod loop_runner;
mod page;
mod render;
mod status;

pub use loop_runner::{run, Action};
