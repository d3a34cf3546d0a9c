use crate::core::menu::{MenuState, Panel};
use crate::core::nav::{Dropdown, NavTarget};
use crate::i18n::{self, use_language};
use dioxus::prelude::*;

use super::nav_link::NavLink;

#[component]
pub fn Chevron() -> Element {
    rsx! {
        span { class: "header__chevron", aria_hidden: "true", "▾" }
    }
}

/// Trigger button plus, when open, a floating panel of the group's links.
#[component]
pub fn DropdownMenu(dropdown: Dropdown, menus: Signal<MenuState>) -> Element {
    let mut menus = menus;
    let _lang = use_language().language();
    let panel = Panel::Dropdown(dropdown);
    let open = menus.read().is_open(panel);
    let label = i18n::tr(dropdown.label_key());
    let slug = dropdown.slug();

    rsx! {
        div { class: "header__dropdown header__dropdown--{slug}",
            button {
                class: "header__dropdown-trigger",
                r#type: "button",
                aria_haspopup: "true",
                aria_expanded: "{open}",
                onclick: move |_| {
                    let now_open = menus.write().toggle(panel);
                    tracing::debug!(dropdown = slug, open = now_open, "dropdown toggled");
                },
                span { "{label}" }
                Chevron {}
            }

            if open {
                div { class: "header__dropdown-panel", role: "menu",
                    for target in dropdown.items().iter().copied() {
                        NavLink {
                            key: "{target.path()}",
                            target,
                            class: "header__dropdown-link",
                            onnavigate: move |to: NavTarget| {
                                tracing::debug!(path = to.path(), "navigating from dropdown");
                                menus.write().navigate();
                            },
                        }
                    }
                }
            }
        }
    }
}
