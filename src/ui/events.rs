//! Application event handling.
//!
//! Background task results arrive here on the UI task, so state updates
//! never race with rendering.

use crate::app::{App, AppEvent};

/// Handle an application event from a background task.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::CategoriesLoaded { generation, result } => {
            if app.category_menu.apply(generation, result) {
                app.clamp_dropdown();
                app.needs_redraw = true;
            }
        }
    }
}
