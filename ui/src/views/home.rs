use dioxus::prelude::*;

use crate::core::language::{brand_title, BRAND_SUBTITLE};
use crate::i18n::use_language;

#[component]
pub fn Home() -> Element {
    // Subscribe to the active language so the page re-renders on change.
    let language = use_language().language();

    rsx! {
        section { class: "page page-home",
            h1 { "{brand_title(language)}" }
            p { class: "page-home__subtitle", "{BRAND_SUBTITLE}" }
            p { {crate::t!("home-intro")} }
        }
    }
}
