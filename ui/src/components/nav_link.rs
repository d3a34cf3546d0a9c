use crate::core::nav::NavTarget;
use crate::i18n::{self, use_language};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing router-aware links, so `ui`
/// never needs to know each platform's `Route` enum.
///
/// If no builder is registered, plain anchors are emitted (full page loads).
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
/// fn nav_link(
///     target: NavTarget,
///     class: &'static str,
///     onclick: EventHandler<MouseEvent>,
///     children: Element,
/// ) -> Element {
///     rsx!( Link { class, to: Route::from(target), onclick, {children} } )
/// }
/// register_nav(NavBuilder { link: nav_link });
/// ```
pub struct NavBuilder {
    // Must wrap `children` in a navigable element for `target` carrying
    // `class`, and fire `onclick` from that element only.
    pub link: fn(
        target: NavTarget,
        class: &'static str,
        onclick: EventHandler<MouseEvent>,
        children: Element,
    ) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("NavBuilder already registered; keeping the first one");
    }
}

pub(crate) fn build_link(
    target: NavTarget,
    class: &'static str,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(target, class, onclick, children),
        None => rsx! {
            a {
                class,
                href: target.path(),
                onclick: move |evt| onclick.call(evt),
                {children}
            }
        },
    }
}

/// Localized link to `target`. `onnavigate` fires when the link is activated.
#[component]
pub fn NavLink(target: NavTarget, class: &'static str, onnavigate: EventHandler<NavTarget>) -> Element {
    // Subscribe so the label follows language changes.
    let _lang = use_language().language();
    let label = i18n::tr(target.label_key());
    let onclick = EventHandler::new(move |_: MouseEvent| onnavigate.call(target));

    build_link(target, class, onclick, rsx! { "{label}" })
}
