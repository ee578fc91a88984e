use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use drill_core::{Dictionary, DictionaryEntry, Level};
use services::{QuizService, QuizSettings};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, IrregularVerbsView};

use super::verbs::DrillTestHandles;

struct TestApp {
    quiz: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Verbs,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: DrillTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Verbs => rsx! { IrregularVerbsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: DrillTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Verbs in a fixed order; with `initial_words` >= their count the sheet
/// holds every one of them.
pub fn test_dictionary(verbs: &[(&str, &str, &str, &str)]) -> Dictionary {
    Dictionary::new(
        verbs
            .iter()
            .map(|&(infinitive, simple, participle, translation)| {
                DictionaryEntry::new(infinitive, simple, participle, translation)
            })
            .collect(),
    )
    .expect("valid test dictionary")
}

pub fn setup_view_harness(view: ViewKind, dictionary: Dictionary, initial_words: usize) -> ViewHarness {
    let settings = QuizSettings::new(Level::One, initial_words);
    let quiz = Arc::new(QuizService::new(Arc::new(dictionary), settings));
    let handles = DrillTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { quiz }),
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
