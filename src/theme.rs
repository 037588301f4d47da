//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette
// ============================================================================

/// Every semantic UI role mapped to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header bar --
    pub header_bar: Style,
    pub brand: Style,
    pub logo: Style,
    pub nav_link: Style,
    pub nav_link_focused: Style,
    pub nav_link_active: Style,
    pub toggler: Style,

    // -- Category dropdown --
    pub menu_item: Style,
    pub menu_item_selected: Style,
    pub menu_border: Style,

    // -- Page body --
    pub page_title: Style,
    pub page_path: Style,
    pub page_body: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            header_bar: Style::default().bg(Color::Rgb(0x2b, 0x1b, 0x3d)),
            brand: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            logo: Style::default().fg(Color::Yellow),
            nav_link: Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            nav_link_focused: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            nav_link_active: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            toggler: Style::default().fg(Color::White),

            menu_item: Style::default().add_modifier(Modifier::BOLD),
            menu_item_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            menu_border: Style::default().fg(Color::Yellow),

            page_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            page_path: Style::default().fg(Color::DarkGray),
            page_body: Style::default(),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
        }
    }

    fn light() -> Self {
        Self {
            header_bar: Style::default().bg(Color::Rgb(0xe8, 0xde, 0xf3)),
            brand: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            logo: Style::default().fg(Color::Magenta),
            nav_link: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            nav_link_focused: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            nav_link_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            toggler: Style::default().fg(Color::Black),

            menu_item: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            menu_item_selected: Style::default().bg(Color::Blue).fg(Color::White),
            menu_border: Style::default().fg(Color::Blue),

            page_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            page_path: Style::default().fg(Color::DarkGray),
            page_body: Style::default().fg(Color::Black),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
        }
    }
}

// ============================================================================
// Style Map
// ============================================================================

/// String-keyed style lookup built from a `ColorPalette`.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 15] = [
    "header_bar",
    "brand",
    "logo",
    "nav_link",
    "nav_link_focused",
    "nav_link_active",
    "toggler",
    "menu_item",
    "menu_item_selected",
    "menu_border",
    "page_title",
    "page_path",
    "page_body",
    "status_bar",
    "panel_border",
];

impl StyleMap {
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 15] = [
            p.header_bar,
            p.brand,
            p.logo,
            p.nav_link,
            p.nav_link_focused,
            p.nav_link_active,
            p.toggler,
            p.menu_item,
            p.menu_item_selected,
            p.menu_border,
            p.page_title,
            p.page_path,
            p.page_body,
            p.status_bar,
            p.panel_border,
        ];

        let map = ROLE_NAMES.iter().copied().zip(styles).collect();
        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_palette_differs_from_dark() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        assert_ne!(dark.nav_link_focused, light.nav_link_focused);
        assert_ne!(dark.menu_item_selected, light.menu_item_selected);
        assert_ne!(dark.status_bar, light.status_bar);
    }

    #[test]
    fn variant_from_str_name() {
        assert_eq!(ThemeVariant::from_str_name("dark"), Some(ThemeVariant::Dark));
        assert_eq!(ThemeVariant::from_str_name("Light"), Some(ThemeVariant::Light));
        assert_eq!(ThemeVariant::from_str_name("neon"), None);
    }

    #[test]
    fn variant_cycles() {
        assert_eq!(ThemeVariant::Dark.next(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.next().name(), "Dark");
    }

    #[test]
    fn style_map_resolves_known_roles() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);

        assert_eq!(sm.resolve("brand"), palette.brand);
        assert_eq!(sm.resolve("menu_item_selected"), palette.menu_item_selected);
        assert_eq!(sm.resolve("status_bar"), palette.status_bar);
    }

    #[test]
    fn style_map_returns_default_for_unknown() {
        let sm = StyleMap::from_palette(&ThemeVariant::Light.palette());
        assert_eq!(sm.resolve("nonexistent_role"), Style::default());
    }

    #[test]
    fn style_map_has_all_roles() {
        let sm = StyleMap::from_palette(&ThemeVariant::Dark.palette());
        assert_eq!(sm.map.len(), ROLE_NAMES.len());
        for name in ROLE_NAMES {
            assert!(sm.map.contains_key(name), "Role '{}' missing from StyleMap", name);
        }
    }
}
