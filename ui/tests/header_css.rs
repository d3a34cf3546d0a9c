//! Selector lint for the header stylesheet.
//!
//! The header components emit BEM classes (`header__*`). A renamed or dropped
//! rule only shows up at runtime, so the selectors the Rust markup relies on
//! are checked here. When renaming a class, update the component markup and
//! this list together.

const HEADER_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ".header {",
    ".header__bar",
    // Brand
    ".header__brand-link",
    ".header__brand-logo",
    ".header__brand-title",
    ".header__brand-subtitle",
    // Desktop bar & dropdowns
    ".header__desktop-nav",
    ".header__link",
    ".header__dropdown-trigger",
    ".header__dropdown-panel",
    ".header__dropdown-link",
    // Language switcher
    ".header__lang-trigger",
    ".header__lang-panel",
    ".header__lang--mobile",
    ".header__lang-option",
    ".header__lang-option--active",
    // Mobile
    ".header__menu-toggle",
    ".header__mobile-nav",
    ".header__mobile-group-label",
    ".header__mobile-sublist",
    // Desktop/mobile breakpoint
    "@media (min-width: 1024px)",
];

#[test]
fn header_css_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !HEADER_CSS.contains(**sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required selectors in header.css:\n{:?}",
        missing.len(),
        missing
    );
}

#[test]
fn mobile_panel_is_hidden_on_desktop() {
    let media = HEADER_CSS
        .split("@media (min-width: 1024px)")
        .nth(1)
        .expect("breakpoint block");
    assert!(media.contains(".header__mobile-nav"));
    assert!(media.contains("display: none"));
}
