use crate::app::App;
use crate::util::{display_width, sanitize_label, truncate_to_width};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Narrowest dropdown, borders included.
const MIN_DROPDOWN_WIDTH: u16 = 14;

/// Render the open category dropdown below `anchor`, clipped to `bounds`.
///
/// One row per menu entry, in list order. An empty list still draws the
/// (empty) box so the dropdown visibly opens.
pub fn render(f: &mut Frame, app: &App, anchor: Rect, bounds: Rect) {
    let Some(selected) = app.dropdown else {
        return;
    };
    if anchor.y >= bounds.bottom() || anchor.x >= bounds.right() {
        return;
    }

    let labels: Vec<_> = app
        .category_menu
        .entries()
        .map(|entry| sanitize_label(entry.label()))
        .collect();

    let widest = labels.iter().map(|l| display_width(l)).max().unwrap_or(0);
    let want_width = (widest as u16).saturating_add(4).max(MIN_DROPDOWN_WIDTH);
    let width = want_width.min(bounds.right() - anchor.x);
    let want_height = (labels.len().min(u16::MAX as usize - 2) as u16) + 2;
    let height = want_height.min(bounds.bottom() - anchor.y);
    if width < 3 || height < 2 {
        return;
    }

    let area = Rect {
        x: anchor.x,
        y: anchor.y,
        width,
        height,
    };
    let label_room = width.saturating_sub(4) as usize;

    let style_item = app.style("menu_item");
    let style_selected = app.style("menu_item_selected");

    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == selected {
                style_selected
            } else {
                style_item
            };
            let text = format!(" {} ", truncate_to_width(label, label_room));
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("menu_border"))
                .style(app.style("header_bar")),
        )
        .highlight_style(Style::default());

    let mut state = ListState::default().with_selected((!labels.is_empty()).then_some(selected));
    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}
