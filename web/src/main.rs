use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, NavigationHeader};
use ui::core::nav::NavTarget;
use ui::i18n::LanguageProvider;
use ui::views::{Home, Page};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/resources")]
    Resources {},
    #[route("/diseases")]
    Diseases {},
    #[route("/webinars")]
    Webinars {},
    #[route("/contact")]
    Contact {},
    #[route("/support-us")]
    SupportUs {},
    #[route("/physician-directory")]
    PhysicianDirectory {},
    #[route("/family-physician")]
    FamilyPhysician {},
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::About => Route::About {},
            NavTarget::Services => Route::Services {},
            NavTarget::Resources => Route::Resources {},
            NavTarget::Diseases => Route::Diseases {},
            NavTarget::Webinars => Route::Webinars {},
            NavTarget::Contact => Route::Contact {},
            NavTarget::SupportUs => Route::SupportUs {},
            NavTarget::PhysicianDirectory => Route::PhysicianDirectory {},
            NavTarget::FamilyPhysician => Route::FamilyPhysician {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_link(
    target: NavTarget,
    class: &'static str,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::from(target),
        onclick: move |evt| onclick.call(evt),
        {children}
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder { link: nav_link });
    }

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        LanguageProvider {
            Router::<Route> {}
        }
    }
}

/// Web layout: the shared header above every routed page.
#[component]
fn WebLayout() -> Element {
    rsx! {
        NavigationHeader {}
        Outlet::<Route> {}
    }
}

#[component]
fn About() -> Element {
    rsx! { Page { target: NavTarget::About } }
}

#[component]
fn Services() -> Element {
    rsx! { Page { target: NavTarget::Services } }
}

#[component]
fn Resources() -> Element {
    rsx! { Page { target: NavTarget::Resources } }
}

#[component]
fn Diseases() -> Element {
    rsx! { Page { target: NavTarget::Diseases } }
}

#[component]
fn Webinars() -> Element {
    rsx! { Page { target: NavTarget::Webinars } }
}

#[component]
fn Contact() -> Element {
    rsx! { Page { target: NavTarget::Contact } }
}

#[component]
fn SupportUs() -> Element {
    rsx! { Page { target: NavTarget::SupportUs } }
}

#[component]
fn PhysicianDirectory() -> Element {
    rsx! { Page { target: NavTarget::PhysicianDirectory } }
}

#[component]
fn FamilyPhysician() -> Element {
    rsx! { Page { target: NavTarget::FamilyPhysician } }
}
