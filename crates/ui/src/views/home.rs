use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let verbs = quiz.dictionary().len();
    let level = quiz.settings().level();

    rsx! {
        div { class: "page",
            h2 { "Home" }
            p { "{verbs} irregular verbs, starting at {level}." }
            Link { class: "btn btn-primary", to: Route::IrregularVerbs {}, "Irregular Verbs" }
        }
    }
}
