//! Shared UI crate for the SHAMS site: the navigation header, its state
//! model and localization. Platform crates supply routing.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Site navigation header (components/header.rs)
    pub mod header;
    pub use header::NavigationHeader;

    pub mod dropdown;
    pub mod language_switcher;
    pub mod mobile_menu;

    // Router seam (components/nav_link.rs)
    pub mod nav_link;
    pub use nav_link::register_nav;
    pub use nav_link::NavBuilder;
}
