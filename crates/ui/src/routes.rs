use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, IrregularVerbsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/irregular-verbs", IrregularVerbsView)] IrregularVerbs {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Drills" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::IrregularVerbs {}, "Irregular verbs" } }
            }
        }
    }
}
