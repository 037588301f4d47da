//! Input handling for the TUI.
//!
//! Keys go to the open category dropdown first, then to the collapsed-menu
//! toggler, then to header focus movement.

use crate::app::App;
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

/// Main input dispatch function.
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('t') => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
            return Action::Continue;
        }
        KeyCode::Char('m') => {
            app.toggle_menu();
            return Action::Continue;
        }
        _ => {}
    }

    if app.dropdown.is_some() {
        handle_dropdown_input(app, code);
    } else if app.links_visible() {
        handle_header_input(app, code);
    } else if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
        // Collapsed and folded: Enter acts on the toggler
        app.toggle_menu();
    }

    Action::Continue
}

/// Keys while the category dropdown is open.
fn handle_dropdown_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => app.dropdown_next(),
        KeyCode::Up | KeyCode::Char('k') => app.dropdown_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => app.dropdown_activate(),
        KeyCode::Esc => app.close_dropdown(),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => app.focus_next(),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => app.focus_prev(),
        _ => {}
    }
}

/// Keys for moving across header items.
///
/// The collapsed layout lists items vertically, so Up/Down move too.
fn handle_header_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => app.focus_next(),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => app.focus_prev(),
        KeyCode::Down | KeyCode::Char('j') if app.collapsed => app.focus_next(),
        KeyCode::Up | KeyCode::Char('k') if app.collapsed => app.focus_prev(),
        KeyCode::Down | KeyCode::Char('j') => {
            // Down on the category item opens the dropdown, like a menu bar
            if app.focused_item() == crate::app::NavItem::Categories {
                app.toggle_dropdown();
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        KeyCode::Esc if app.collapsed => app.toggle_menu(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{test_app, with_categories};
    use crate::catalog::Category;
    use crate::nav::{Role, Route};

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_input(app, code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app(Role::Guest);
        assert!(matches!(press(&mut app, KeyCode::Char('q')), Action::Quit));
        assert!(matches!(
            handle_input(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit
        ));
    }

    #[test]
    fn test_keyboard_path_to_category() {
        let mut app = test_app(Role::Guest);
        with_categories(
            &mut app,
            vec![Category::new(1, "Electronics"), Category::new(2, "Books")],
        );

        press(&mut app, KeyCode::Right); // Category
        press(&mut app, KeyCode::Enter); // open dropdown
        press(&mut app, KeyCode::Down); // Books
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route.path(), "/product/category/2/Books");
        assert!(app.dropdown.is_none());
    }

    #[test]
    fn test_down_opens_dropdown_on_category() {
        let mut app = test_app(Role::Guest);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.dropdown, Some(0));

        press(&mut app, KeyCode::Esc);
        assert!(app.dropdown.is_none());
    }

    #[test]
    fn test_moving_focus_closes_dropdown() {
        let mut app = test_app(Role::Guest);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(app.dropdown.is_some());

        press(&mut app, KeyCode::Right);
        assert!(app.dropdown.is_none());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route.path(), "/aboutus");
    }

    #[test]
    fn test_collapsed_enter_expands_menu() {
        let mut app = test_app(Role::Guest);
        app.collapsed = true;

        press(&mut app, KeyCode::Enter);
        assert!(app.menu_expanded);
        assert_eq!(app.route, Route::Home);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route.path(), "/aboutus");
        assert!(!app.menu_expanded);
    }

    #[test]
    fn test_theme_key_sets_status() {
        let mut app = test_app(Role::Guest);
        press(&mut app, KeyCode::Char('t'));
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert_eq!(msg, "Theme: Light");
    }
}
