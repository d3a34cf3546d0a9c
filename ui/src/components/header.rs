//! Site header: brand block, desktop bar with two dropdowns, language
//! switchers for both layouts and the collapsible mobile menu.
//!
//! The header takes no props. It needs a `LanguageProvider` somewhere above it
//! and, for client-side navigation, a `NavBuilder` registered by the platform
//! crate (see `nav_link`).

use crate::core::language::{brand_title, LanguageCode, BRAND_SUBTITLE};
use crate::core::menu::{MenuState, Panel, SwitcherInstance};
use crate::core::nav::{NavEntry, NavTarget, NAV_ENTRIES};
use crate::i18n::use_language;
use crate::t;
use dioxus::prelude::*;

use super::dropdown::DropdownMenu;
use super::language_switcher::LanguageSwitcher;
use super::mobile_menu::MobileMenu;
use super::nav_link::{build_link, NavLink};

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));
const LOGO: Asset = asset!("/assets/images/shams-logo.svg");

#[component]
pub fn NavigationHeader() -> Element {
    let language = use_language().language();
    let mut menus = use_signal(MenuState::default);
    let mobile_open = menus.read().is_open(Panel::MobileMenu);

    #[cfg(debug_assertions)]
    tracing::debug!(lang = %language, menus = ?*menus.peek(), "NavigationHeader render");

    let on_navigate = move |to: NavTarget| {
        tracing::debug!(path = to.path(), "navigating from header");
        menus.write().navigate();
    };

    let desktop_entries = NAV_ENTRIES.iter().map(|entry| match *entry {
        NavEntry::Link(target) => rsx! {
            NavLink {
                key: "{target.path()}",
                target,
                class: "header__link",
                onnavigate: on_navigate,
            }
        },
        NavEntry::Group(dropdown) => rsx! {
            DropdownMenu { key: "{dropdown.slug()}", dropdown, menus }
        },
    });

    rsx! {
        // Include header stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header {
            id: "site-header",
            class: "header",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape && menus.peek().any_open() {
                    tracing::debug!("escape: closing header panels");
                    menus.write().close_all();
                }
            },
            div { class: "header__inner",
                div { class: "header__bar",
                    Brand { language, onnavigate: on_navigate }

                    nav { class: "header__desktop-nav", {desktop_entries} }

                    div { class: "header__desktop-lang",
                        LanguageSwitcher { instance: SwitcherInstance::Desktop, menus }
                    }

                    div { class: "header__mobile-controls",
                        LanguageSwitcher { instance: SwitcherInstance::Mobile, menus }
                        button {
                            class: "header__menu-toggle",
                            r#type: "button",
                            aria_label: t!("header-toggle-menu"),
                            aria_expanded: "{mobile_open}",
                            onclick: move |_| {
                                let now_open = menus.write().toggle(Panel::MobileMenu);
                                tracing::debug!(open = now_open, "mobile menu toggled");
                            },
                            span { class: "header__menu-icon", aria_hidden: "true", "☰" }
                        }
                    }
                }

                MobileMenu { menus }
            }
        }
    }
}

/// Logo, localized title and the fixed subtitle, linking home.
#[component]
fn Brand(language: LanguageCode, onnavigate: EventHandler<NavTarget>) -> Element {
    let title = brand_title(language);
    let onclick = EventHandler::new(move |_: MouseEvent| onnavigate.call(NavTarget::Home));

    rsx! {
        div { class: "header__brand",
            {build_link(NavTarget::Home, "header__brand-link", onclick, rsx! {
                img { class: "header__brand-logo", src: LOGO, alt: "SHAMS Logo" }
                span { class: "header__brand-text",
                    span { class: "header__brand-title", "{title}" }
                    span { class: "header__brand-subtitle", "{BRAND_SUBTITLE}" }
                }
            })}
        }
    }
}
