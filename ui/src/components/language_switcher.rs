use crate::core::language::{flag_glyph, LanguageOption, LANGUAGES};
use crate::core::menu::{MenuState, Panel, SwitcherInstance};
use crate::i18n::use_language;
use crate::t;
use dioxus::prelude::*;

use super::dropdown::Chevron;

/// Flag trigger plus the five-language picker.
///
/// The desktop bar and the mobile controls each mount one instance; every
/// instance has its own visibility flag but both write the same
/// process-wide language.
#[component]
pub fn LanguageSwitcher(instance: SwitcherInstance, menus: Signal<MenuState>) -> Element {
    let mut menus = menus;
    let mut language = use_language();
    let active = language.language();
    let panel = Panel::Language(instance);
    let open = menus.read().is_open(panel);
    let slug = instance.slug();

    let options: Vec<Element> = LANGUAGES
        .iter()
        .map(|option: &LanguageOption| {
            let option = *option;
            let selected = option.code == active;
            let class = if selected {
                "header__lang-option header__lang-option--active"
            } else {
                "header__lang-option"
            };
            rsx! {
                li { key: "{option.code}",
                    button {
                        class,
                        r#type: "button",
                        role: "option",
                        lang: option.code.code(),
                        aria_selected: "{selected}",
                        onclick: move |_| {
                            language.set_language(option.code);
                            menus.write().select_language(instance);
                        },
                        span { class: "header__lang-flag", "{option.flag_glyph}" }
                        span { class: "header__lang-name", "{option.display_name}" }
                    }
                }
            }
        })
        .collect();

    rsx! {
        div { class: "header__lang header__lang--{slug}",
            button {
                class: "header__lang-trigger",
                r#type: "button",
                aria_label: t!("header-select-language"),
                aria_haspopup: "listbox",
                aria_expanded: "{open}",
                onclick: move |_| {
                    let now_open = menus.write().toggle(panel);
                    tracing::debug!(switcher = slug, open = now_open, "language panel toggled");
                },
                span { class: "header__lang-icon", aria_hidden: "true", "🌐" }
                span { class: "header__lang-flag", "{flag_glyph(active)}" }
                Chevron {}
            }

            if open {
                ul { class: "header__lang-panel", role: "listbox", {options.into_iter()} }
            }
        }
    }
}
