//! Click-through scenarios for the header, driven through the state model the
//! components render from. Rendered output is covered in `header_render.rs`.

use ui::core::language::{brand_title, LanguageCode};
use ui::core::menu::{MenuState, Panel, SwitcherInstance};
use ui::core::nav::{Dropdown, NavTarget};

const EDUCATION: Panel = Panel::Dropdown(Dropdown::Education);
const PHYSICIAN: Panel = Panel::Dropdown(Dropdown::PhysicianDirectory);

#[test]
fn education_dropdown_then_webinars() {
    let mut menus = MenuState::default();
    menus.toggle(EDUCATION);
    assert!(menus.is_open(EDUCATION));
    assert!(!menus.is_open(PHYSICIAN));

    assert!(Dropdown::Education.items().contains(&NavTarget::Webinars));
    menus.navigate();
    assert!(!menus.is_open(EDUCATION));
}

#[test]
fn picking_a_language_closes_only_that_switcher() {
    for instance in [SwitcherInstance::Desktop, SwitcherInstance::Mobile] {
        let mut menus = MenuState::default();
        menus.toggle(Panel::Language(SwitcherInstance::Desktop));
        menus.toggle(Panel::Language(SwitcherInstance::Mobile));
        menus.select_language(instance);
        assert!(!menus.is_open(Panel::Language(instance)));
        assert!(menus.any_open());
    }
}

#[test]
fn brand_title_follows_language() {
    assert_eq!(brand_title(LanguageCode::Ar), "شمس");
    assert_eq!(brand_title(LanguageCode::En), "SHAMS");
}

#[test]
fn mobile_menu_open_close_leaves_no_residue() {
    let mut menus = MenuState::default();
    menus.toggle(Panel::MobileMenu);
    assert!(menus.is_open(Panel::MobileMenu));
    assert!(!menus.is_open(EDUCATION) && !menus.is_open(PHYSICIAN));

    menus.toggle(Panel::MobileMenu);
    assert_eq!(menus, MenuState::default());
}
