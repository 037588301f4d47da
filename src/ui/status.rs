use crate::app::App;
use crate::util::sanitize_label;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if let Some(selected) = app.dropdown {
        match app.category_menu.entry(selected) {
            Some(entry) => Cow::Owned(format!(
                "→ {}  [↑↓]select [Enter]open [Esc]close",
                sanitize_label(&entry.route().path())
            )),
            None => Cow::Borrowed("[Esc]close"),
        }
    } else if app.collapsed && !app.menu_expanded {
        Cow::Borrowed("[m]enu [t]heme [q]uit")
    } else {
        Cow::Borrowed("[←→/Tab]move [Enter]open [m]enu [t]heme [q]uit")
    };

    f.render_widget(Paragraph::new(text).style(app.style("status_bar")), area);
}
