//! Client-side routes and the static parts of the navigation header.
//!
//! Routes are plain path strings; "navigating" means the application records
//! the active route and the page body shows it. There is no router beyond that.

use crate::catalog::CategoryId;
use std::fmt;

// ============================================================================
// Routes
// ============================================================================

/// A navigation target inside the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing page, target of the brand link.
    Home,
    /// Product listing for one category.
    Category { id: CategoryId, name: String },
    /// Any fixed path (About Us, Contact Us, role links).
    Static(&'static str),
}

impl Route {
    /// Route of a category's product listing.
    pub fn category(id: &CategoryId, name: &str) -> Self {
        Self::Category {
            id: id.clone(),
            name: name.to_string(),
        }
    }

    /// Path requested when the route is activated.
    ///
    /// Category paths embed the raw id and name without escaping:
    /// `/product/category/{id}/{name}`.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Category { id, name } => format!("/product/category/{}/{}", id, name),
            Self::Static(path) => (*path).to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// ============================================================================
// Static Links
// ============================================================================

/// A labelled link with a fixed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, path: &'static str) -> Self {
        Self { label, path }
    }

    pub fn route(&self) -> Route {
        Route::Static(self.path)
    }
}

pub const ABOUT_US: NavLink = NavLink::new("About Us", "/aboutus");
pub const CONTACT_US: NavLink = NavLink::new("Contact Us", "/contactus");

/// Links that follow the category dropdown, in display order.
pub const STATIC_LINKS: [NavLink; 2] = [ABOUT_US, CONTACT_US];

// ============================================================================
// Role Navigation
// ============================================================================

/// Who is browsing the storefront. Selects the role navigation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Guest,
    Customer,
    Seller,
    Delivery,
    Admin,
}

impl Role {
    /// Parse a role name (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guest" => Some(Self::Guest),
            "customer" => Some(Self::Customer),
            "seller" => Some(Self::Seller),
            "delivery" => Some(Self::Delivery),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Customer => "customer",
            Self::Seller => "seller",
            Self::Delivery => "delivery",
            Self::Admin => "admin",
        }
    }
}

const LOGOUT: NavLink = NavLink::new("Logout", "/user/logout");

const GUEST_LINKS: &[NavLink] = &[
    NavLink::new("Register", "/user/register"),
    NavLink::new("Login", "/user/login"),
];

const CUSTOMER_LINKS: &[NavLink] = &[
    NavLink::new("Cart", "/customer/cart"),
    NavLink::new("My Orders", "/customer/order"),
    LOGOUT,
];

const SELLER_LINKS: &[NavLink] = &[
    NavLink::new("Add Product", "/product/add"),
    NavLink::new("My Products", "/seller/product/all"),
    NavLink::new("Seller Orders", "/seller/order/all"),
    LOGOUT,
];

const DELIVERY_LINKS: &[NavLink] = &[
    NavLink::new("My Deliveries", "/delivery/order/all"),
    LOGOUT,
];

const ADMIN_LINKS: &[NavLink] = &[
    NavLink::new("Add Category", "/category/add"),
    NavLink::new("All Categories", "/admin/category/all"),
    NavLink::new("Sellers", "/admin/seller/all"),
    NavLink::new("Customers", "/admin/customer/all"),
    NavLink::new("All Orders", "/admin/order/all"),
    LOGOUT,
];

/// The sibling navigation block rendered after Contact Us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleNav {
    role: Role,
}

impl RoleNav {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn links(&self) -> &'static [NavLink] {
        match self.role {
            Role::Guest => GUEST_LINKS,
            Role::Customer => CUSTOMER_LINKS,
            Role::Seller => SELLER_LINKS,
            Role::Delivery => DELIVERY_LINKS,
            Role::Admin => ADMIN_LINKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_path_exact() {
        let route = Route::category(&CategoryId::from(1), "Electronics");
        assert_eq!(route.path(), "/product/category/1/Electronics");
    }

    #[test]
    fn test_category_path_not_escaped() {
        let route = Route::category(&CategoryId::from("c 9"), "Home & Garden");
        assert_eq!(route.path(), "/product/category/c 9/Home & Garden");
    }

    #[test]
    fn test_fixed_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(ABOUT_US.route().path(), "/aboutus");
        assert_eq!(CONTACT_US.route().to_string(), "/contactus");
    }

    #[test]
    fn test_role_from_str_name() {
        assert_eq!(Role::from_str_name("Seller"), Some(Role::Seller));
        assert_eq!(Role::from_str_name(" admin "), Some(Role::Admin));
        assert_eq!(Role::from_str_name("DELIVERY"), Some(Role::Delivery));
        assert_eq!(Role::from_str_name("vendor"), None);
    }

    #[test]
    fn test_role_names_round_trip() {
        for role in [
            Role::Guest,
            Role::Customer,
            Role::Seller,
            Role::Delivery,
            Role::Admin,
        ] {
            assert_eq!(Role::from_str_name(role.name()), Some(role));
        }
    }

    #[test]
    fn test_delivery_links() {
        let paths: Vec<_> = RoleNav::new(Role::Delivery)
            .links()
            .iter()
            .map(|l| l.path)
            .collect();
        assert_eq!(paths, vec!["/delivery/order/all", "/user/logout"]);
    }

    #[test]
    fn test_guest_links() {
        let labels: Vec<_> = RoleNav::new(Role::Guest)
            .links()
            .iter()
            .map(|l| l.label)
            .collect();
        assert_eq!(labels, vec!["Register", "Login"]);
    }

    #[test]
    fn test_signed_in_roles_end_with_logout() {
        for role in [Role::Customer, Role::Seller, Role::Delivery, Role::Admin] {
            let links = RoleNav::new(role).links();
            assert_eq!(links.last(), Some(&LOGOUT), "role {}", role.name());
        }
    }
}
