//! Render functions for the TUI.
//!
//! Lays out header, page body and status bar, then draws the category
//! dropdown on top so it overlaps the body like a popup menu.

use crate::app::{App, COLLAPSE_BELOW_WIDTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use super::{categories, header, page, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 30;
pub(super) const MIN_HEIGHT: u16 = 8;

/// Main render dispatch function.
///
/// Takes `&mut App` because the collapse state follows the terminal width.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    app.collapsed =
        area.width < COLLAPSE_BELOW_WIDTH || header::inline_width(app) > area.width as usize;

    let header_height = header::height(app).min(area.height.saturating_sub(2));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let anchor = header::render(f, app, chunks[0]);
    // The dropdown only stays open while its "Category" item is on screen
    if anchor.is_none() {
        app.dropdown = None;
    }

    page::render(f, app, chunks[1]);
    status::render(f, app, chunks[2]);

    if let Some(anchor) = anchor {
        categories::render(f, app, anchor, chunks[1].union(chunks[0]));
    }
}
