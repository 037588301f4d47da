use crate::catalog::{Category, CategoryClient, FetchError};
use crate::menu::CategoryMenuLoader;
use crate::nav::{NavLink, Role, RoleNav, Route, STATIC_LINKS};
use crate::theme::{StyleMap, ThemeVariant};
use ratatui::style::Style;
use std::borrow::Cow;
use tokio::time::Instant;

/// Terminals narrower than this collapse the header links behind a toggler.
pub const COLLAPSE_BELOW_WIDTH: u16 = 80;

/// How long a status message stays visible.
const STATUS_TTL_SECS: u64 = 3;

// ============================================================================
// Header Items
// ============================================================================

/// A focusable item of the navigation header, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    /// Logo and brand text, links home.
    Brand,
    /// The category dropdown toggle.
    Categories,
    /// A fixed link (About Us, Contact Us, role links).
    Link(NavLink),
}

impl NavItem {
    pub fn label<'a>(&self, brand: &'a str) -> &'a str {
        match self {
            Self::Brand => brand,
            Self::Categories => "Category",
            Self::Link(link) => link.label,
        }
    }
}

// ============================================================================
// Events
// ============================================================================

/// Events from background tasks.
#[derive(Debug)]
pub enum AppEvent {
    /// The header's category request resolved.
    ///
    /// Fields:
    /// - `generation`: the loader generation that spawned the request
    /// - `result`: the categories in backend order, or why the load failed
    CategoriesLoaded {
        generation: u64,
        result: Result<Vec<Category>, FetchError>,
    },
}

// ============================================================================
// Application State
// ============================================================================

/// Startup choices that shape the header.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub brand: String,
    pub role: Role,
    pub theme: ThemeVariant,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            brand: "Multi-Vendor Shop".to_string(),
            role: Role::Guest,
            theme: ThemeVariant::Dark,
        }
    }
}

/// Central application state
pub struct App {
    pub category_client: CategoryClient,
    pub category_menu: CategoryMenuLoader,
    pub role_nav: RoleNav,
    pub brand: String,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,

    // Header state
    /// Index into `nav_items()` of the focused header item.
    pub focus: usize,
    /// Selected dropdown entry while the category dropdown is open.
    pub dropdown: Option<usize>,
    /// Set by the renderer from the terminal width.
    pub collapsed: bool,
    /// Whether the collapsed link list is expanded.
    pub menu_expanded: bool,

    /// Currently displayed route.
    pub route: Route,

    pub status_message: Option<(Cow<'static, str>, Instant)>,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(category_client: CategoryClient, settings: AppSettings) -> Self {
        Self {
            category_client,
            category_menu: CategoryMenuLoader::new(),
            role_nav: RoleNav::new(settings.role),
            brand: settings.brand,
            theme_variant: settings.theme,
            theme: StyleMap::from_palette(&settings.theme.palette()),
            focus: 0,
            dropdown: None,
            collapsed: false,
            menu_expanded: false,
            route: Route::Home,
            status_message: None,
            needs_redraw: true,
        }
    }

    /// Header items in display order: brand, category dropdown, static
    /// links, then the role links.
    pub fn nav_items(&self) -> Vec<NavItem> {
        let mut items = Vec::with_capacity(2 + STATIC_LINKS.len() + self.role_nav.links().len());
        items.push(NavItem::Brand);
        items.push(NavItem::Categories);
        items.extend(STATIC_LINKS.iter().copied().map(NavItem::Link));
        items.extend(self.role_nav.links().iter().copied().map(NavItem::Link));
        items
    }

    pub fn focused_item(&self) -> NavItem {
        let items = self.nav_items();
        items
            .get(self.focus)
            .copied()
            .unwrap_or(NavItem::Brand)
    }

    /// Whether `item` links to the route currently displayed.
    pub fn is_active(&self, item: NavItem) -> bool {
        match (item, &self.route) {
            (NavItem::Brand, Route::Home) => true,
            (NavItem::Categories, Route::Category { .. }) => true,
            (NavItem::Link(link), Route::Static(path)) => link.path == *path,
            _ => false,
        }
    }

    // ------------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        let len = self.nav_items().len();
        self.focus = (self.focus + 1) % len;
        self.dropdown = None;
    }

    pub fn focus_prev(&mut self) {
        let len = self.nav_items().len();
        self.focus = (self.focus + len - 1) % len;
        self.dropdown = None;
    }

    /// Activate the focused header item.
    ///
    /// Links navigate; the category item opens (or closes) the dropdown.
    pub fn activate(&mut self) {
        match self.focused_item() {
            NavItem::Brand => self.navigate(Route::Home),
            NavItem::Categories => self.toggle_dropdown(),
            NavItem::Link(link) => self.navigate(link.route()),
        }
    }

    // ------------------------------------------------------------------------
    // Category dropdown
    // ------------------------------------------------------------------------

    pub fn toggle_dropdown(&mut self) {
        self.dropdown = match self.dropdown {
            Some(_) => None,
            None => Some(0),
        };
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = None;
    }

    pub fn dropdown_next(&mut self) {
        let len = self.category_menu.len();
        if let Some(selected) = self.dropdown.as_mut() {
            if len > 0 {
                *selected = (*selected + 1).min(len - 1);
            }
        }
    }

    pub fn dropdown_prev(&mut self) {
        if let Some(selected) = self.dropdown.as_mut() {
            *selected = selected.saturating_sub(1);
        }
    }

    /// Navigate to the selected dropdown entry. Closes the dropdown either way.
    pub fn dropdown_activate(&mut self) {
        let route = self
            .dropdown
            .and_then(|i| self.category_menu.entry(i))
            .map(|entry| entry.route());
        self.close_dropdown();
        if let Some(route) = route {
            self.navigate(route);
        }
    }

    /// Keep the dropdown selection inside the current list.
    pub fn clamp_dropdown(&mut self) {
        let len = self.category_menu.len();
        if let Some(selected) = self.dropdown.as_mut() {
            *selected = (*selected).min(len.saturating_sub(1));
        }
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Client-side navigation: record the route and fold the menus away.
    pub fn navigate(&mut self, route: Route) {
        tracing::info!(path = %route, "Navigate");
        self.route = route;
        self.dropdown = None;
        self.menu_expanded = false;
        self.needs_redraw = true;
    }

    /// Expand or collapse the link list shown in narrow terminals.
    pub fn toggle_menu(&mut self) {
        self.menu_expanded = !self.menu_expanded;
        if !self.menu_expanded {
            self.dropdown = None;
        }
    }

    /// Whether header links are currently reachable.
    pub fn links_visible(&self) -> bool {
        !self.collapsed || self.menu_expanded
    }

    // ------------------------------------------------------------------------
    // Theme and status
    // ------------------------------------------------------------------------

    /// Resolve a semantic style role name to a concrete `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    /// Cycle to the next theme variant. Returns its name for status display.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.theme_variant = next;
        self.theme = StyleMap::from_palette(&next.palette());
        self.needs_redraw = true;
        next.name()
    }

    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}
