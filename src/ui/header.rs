use crate::app::{App, NavItem};
use crate::util::{display_width, truncate_to_width};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const LOGO: &str = "◆ ";
const TOGGLER: &str = "[≡]";
const DROPDOWN_MARK: &str = " ▾";
const GAP: &str = "   ";

/// Rows the header needs for the current collapse/expand state.
pub(super) fn height(app: &App) -> u16 {
    // One content row plus the bottom border
    let base = 2;
    if app.collapsed && app.menu_expanded {
        // Every item except the brand gets its own row
        base + (app.nav_items().len().saturating_sub(1)).min(u16::MAX as usize) as u16
    } else {
        base
    }
}

/// Render the navigation header.
///
/// Returns the anchor rectangle below the "Category" item, where the
/// dropdown opens, or `None` when that item is not on screen.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) -> Option<Rect> {
    if area.width < 3 || area.height < 1 {
        return None;
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(app.style("panel_border"))
        .style(app.style("header_bar"));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 {
        return None;
    }

    if app.collapsed {
        render_collapsed(f, app, inner)
    } else {
        render_inline(f, app, inner)
    }
}

fn item_style(app: &App, index: usize, item: NavItem) -> Style {
    if index == app.focus && app.links_visible() {
        app.style("nav_link_focused")
    } else if item == NavItem::Brand {
        app.style("brand")
    } else if app.is_active(item) {
        app.style("nav_link_active")
    } else {
        app.style("nav_link")
    }
}

fn item_text(app: &App, item: NavItem) -> String {
    match item {
        NavItem::Categories => format!("{}{}", item.label(&app.brand), DROPDOWN_MARK),
        _ => item.label(&app.brand).to_string(),
    }
}

/// Columns the single-row layout needs to show every item.
///
/// One gap separates each pair of neighbours, including the minimum padding
/// between the left items and the role block.
pub(super) fn inline_width(app: &App) -> usize {
    let items = app.nav_items();
    let text: usize = items
        .iter()
        .map(|item| display_width(&item_text(app, *item)))
        .sum();
    display_width(LOGO) + text + GAP.len() * items.len().saturating_sub(1)
}

/// Wide terminals: everything on one row, role links pushed to the right edge.
fn render_inline(f: &mut Frame, app: &App, area: Rect) -> Option<Rect> {
    let items = app.nav_items();
    let role_count = app.role_nav.links().len();
    let split = items.len() - role_count;

    let mut spans = vec![Span::styled(LOGO, app.style("logo"))];
    let mut offset = display_width(LOGO);
    let mut anchor = None;

    for (i, item) in items.iter().enumerate().take(split) {
        if i > 0 {
            spans.push(Span::raw(GAP));
            offset += GAP.len();
        }
        let text = item_text(app, *item);
        let width = display_width(&text);
        if *item == NavItem::Categories {
            anchor = Some((offset, width));
        }
        offset += width;
        spans.push(Span::styled(text, item_style(app, i, *item)));
    }

    let right: Vec<(usize, String)> = items
        .iter()
        .enumerate()
        .skip(split)
        .map(|(i, item)| (i, item_text(app, *item)))
        .collect();
    let right_width: usize = right
        .iter()
        .map(|(_, text)| display_width(text))
        .sum::<usize>()
        + GAP.len() * right.len();

    let padding = (area.width as usize).saturating_sub(offset + right_width).max(GAP.len());
    spans.push(Span::raw(" ".repeat(padding)));
    for (i, text) in right {
        let style = item_style(app, i, items[i]);
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(GAP));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);

    let (x, width) = anchor?;
    if x >= area.width as usize {
        return None;
    }
    Some(Rect {
        x: area.x + x as u16,
        y: area.y + 1,
        width: width.min(area.width as usize - x) as u16,
        height: 1,
    })
}

/// Narrow terminals: brand and toggler on the first row, links listed
/// vertically beneath when expanded.
fn render_collapsed(f: &mut Frame, app: &App, area: Rect) -> Option<Rect> {
    let brand_room = (area.width as usize).saturating_sub(display_width(LOGO) + TOGGLER.len() + 1);
    let brand = truncate_to_width(&app.brand, brand_room);
    let padding = (area.width as usize)
        .saturating_sub(display_width(LOGO) + display_width(&brand) + TOGGLER.len());

    let first_row = Line::from(vec![
        Span::styled(LOGO, app.style("logo")),
        Span::styled(brand.into_owned(), item_style(app, 0, NavItem::Brand)),
        Span::raw(" ".repeat(padding)),
        Span::styled(TOGGLER, app.style("toggler")),
    ]);
    f.render_widget(
        Paragraph::new(first_row),
        Rect {
            height: 1,
            ..area
        },
    );

    if !app.menu_expanded {
        return None;
    }

    let mut anchor = None;
    for (row, (i, item)) in app.nav_items().into_iter().enumerate().skip(1).enumerate() {
        let y = area.y + 1 + row as u16;
        if y >= area.y + area.height {
            break;
        }
        let text = format!("  {}", item_text(app, item));
        let line_area = Rect {
            y,
            height: 1,
            ..area
        };
        if item == NavItem::Categories {
            anchor = Some(Rect {
                x: area.x + 2,
                y: y + 1,
                width: display_width(&text).saturating_sub(2) as u16,
                height: 1,
            });
        }
        f.render_widget(
            Paragraph::new(Span::styled(text, item_style(app, i, item))),
            line_area,
        );
    }
    anchor
}
