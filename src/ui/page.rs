use crate::app::{App, NavItem};
use crate::nav::Route;
use crate::util::sanitize_label;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the page body for the active route.
///
/// Routing stops at "which path is active": pages other than the header are
/// owned by the rest of the storefront, so the body only names the target.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let title = match &app.route {
        Route::Home => format!("Welcome to {}", app.brand),
        Route::Category { name, .. } => format!("Products in {}", sanitize_label(name)),
        Route::Static(path) => app
            .nav_items()
            .into_iter()
            .find_map(|item| match item {
                NavItem::Link(link) if link.path == *path => {
                    Some(link.label.to_string())
                }
                _ => None,
            })
            .unwrap_or_else(|| (*path).to_string()),
    };

    let lines = vec![
        Line::from(Span::styled(title, app.style("page_title"))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Path: ", app.style("page_path")),
            Span::styled(sanitize_label(&app.route.path()).into_owned(), app.style("page_body")),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border")),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
