//! Shared UI crate for the Protector demo site. Widgets, pure logic and theme live here;
//! the platform crates only pick a fetcher and launch.

pub mod core;
pub mod i18n;
pub mod views;
pub mod widgets;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme, inlined by every launcher.
pub const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));
