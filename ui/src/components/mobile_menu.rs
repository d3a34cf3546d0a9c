use crate::core::menu::{MenuState, Panel};
use crate::core::nav::{NavEntry, NavTarget, NAV_ENTRIES};
use crate::i18n::{self, use_language};
use dioxus::prelude::*;

use super::nav_link::NavLink;

/// Flattened copy of the desktop bar: groups become a label plus an indented sublist.
#[component]
pub fn MobileMenu(menus: Signal<MenuState>) -> Element {
    let mut menus = menus;
    let _lang = use_language().language();

    if !menus.read().is_open(Panel::MobileMenu) {
        return rsx! {};
    }

    let on_navigate = move |to: NavTarget| {
        tracing::debug!(path = to.path(), "navigating from mobile menu");
        menus.write().navigate();
    };

    let entries = NAV_ENTRIES.iter().map(|entry| match *entry {
        NavEntry::Link(target) => rsx! {
            NavLink {
                key: "{target.path()}",
                target,
                class: "header__mobile-link",
                onnavigate: on_navigate,
            }
        },
        NavEntry::Group(dropdown) => {
            let label = i18n::tr(dropdown.label_key());
            rsx! {
                div { key: "{dropdown.slug()}", class: "header__mobile-group",
                    span { class: "header__mobile-group-label", "{label}" }
                    div { class: "header__mobile-sublist",
                        for target in dropdown.items().iter().copied() {
                            NavLink {
                                key: "{target.path()}",
                                target,
                                class: "header__mobile-sublink",
                                onnavigate: on_navigate,
                            }
                        }
                    }
                }
            }
        }
    });

    rsx! {
        nav { class: "header__mobile-nav", {entries} }
    }
}
