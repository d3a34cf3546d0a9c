use dioxus::prelude::*;

use crate::core::nav::NavTarget;
use crate::i18n::{self, use_language};

/// Content page shell for every header target other than home.
#[component]
pub fn Page(target: NavTarget) -> Element {
    let _lang = use_language().language();
    let title = i18n::tr(target.label_key());

    rsx! {
        section { class: "page page-section", "data-path": target.path(),
            h1 { "{title}" }
            p { class: "page__note", {crate::t!("page-coming-soon")} }
        }
    }
}
