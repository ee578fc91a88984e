use dioxus::prelude::*;

use drill_core::VerbForm;
use services::SessionError;

use crate::context::AppContext;
use crate::vm::{DrillIntent, FieldStatus, apply_drill_intent, map_drill, map_level_buttons};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn IrregularVerbsView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let session = use_signal(move || quiz.start_session());
    let error = use_signal(|| None::<SessionError>);

    let dispatch = use_callback(move |intent: DrillIntent| {
        let mut session = session;
        let mut error = error;
        let outcome = {
            let mut guard = session.write();
            apply_drill_intent(&mut guard, intent)
        };
        error.set(outcome.err());
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DrillTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    let simple_heading = VerbForm::Simple.label();
    let participle_heading = VerbForm::Participle.label();
    let (vm, levels) = {
        let session = session.read();
        (map_drill(&session), map_level_buttons(session.level()))
    };

    let level_buttons = levels.iter().map(|button| {
        let level = button.level;
        rsx! {
            button {
                key: "{button.label}",
                class: "btn verbs-level",
                r#type: "button",
                disabled: button.active,
                onclick: move |_| dispatch.call(DrillIntent::ChangeLevel(level)),
                "{button.label}"
            }
        }
    });

    let rows = vm.rows.iter().map(|row| {
        let position = row.position;
        let translation = row.translation.clone();
        let cells = row.fields.iter().map(|field| {
            let form = field.form;
            let class = field.input_class();
            let correct = field.status == FieldStatus::Correct;
            let wrong = field.status == FieldStatus::Wrong;
            rsx! {
                div { class: "verbs-cell", title: "{translation}",
                    if let Some(caption) = field.caption.as_ref() {
                        span { class: "verbs-caption", "{caption}" }
                    }
                    div { class: "verbs-input-wrap",
                        input {
                            class: "{class}",
                            r#type: "text",
                            autocomplete: "off",
                            aria_invalid: wrong,
                            disabled: field.disabled,
                            value: "{field.value}",
                            oninput: move |evt| {
                                dispatch.call(DrillIntent::Edit {
                                    position,
                                    form,
                                    text: evt.value(),
                                });
                            },
                        }
                        if correct {
                            span { class: "verbs-check", aria_hidden: "true", "✓" }
                        }
                    }
                }
            }
        });
        rsx! {
            div { key: "{position}-{row.entry_id}", class: "verbs-row",
                {cells}
            }
        }
    });

    rsx! {
        div {
            class: "page verbs-page",
            onkeydown: move |evt| {
                if matches!(evt.data.key(), Key::Enter) {
                    evt.prevent_default();
                    dispatch.call(DrillIntent::Check);
                }
            },
            header { class: "view-header",
                h2 { class: "view-title", "Irregular Verbs" }
            }
            div { class: "verbs-levels",
                {level_buttons}
            }
            div { class: "view-divider" }
            div { class: "verbs-layout",
                div { class: "verbs-sheet",
                    div { class: "verbs-row verbs-row--header",
                        span { class: "verbs-heading", "{simple_heading}" }
                        span { class: "verbs-heading", "{participle_heading}" }
                    }
                    {rows}
                }
                aside { class: "verbs-actions",
                    div { class: "verbs-action-group",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            title: "Check",
                            onclick: move |_| dispatch.call(DrillIntent::Check),
                            "Check"
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            title: "Reset",
                            onclick: move |_| dispatch.call(DrillIntent::Reset),
                            "Reset"
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            title: "Add word",
                            disabled: !vm.can_add_word,
                            onclick: move |_| dispatch.call(DrillIntent::AddWord),
                            "Add word"
                        }
                    }
                    p { class: "verbs-remaining", "{vm.remaining_label}" }
                    if let Some(score) = vm.score_label.as_ref() {
                        p { class: "verbs-score", "{score}" }
                    }
                    if let Some(err) = error() {
                        p { class: "verbs-error", "{err}" }
                    }
                    div { class: "verbs-hints",
                        p { "* You can press 'Enter' to check" }
                        p { "* Hover over the inputs to see the translation" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DrillTestHandles {
    dispatch: Rc<RefCell<Option<Callback<DrillIntent>>>>,
    session: Rc<RefCell<Option<Signal<services::QuizSession>>>>,
}

#[cfg(test)]
impl DrillTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<DrillIntent>,
        session: Signal<services::QuizSession>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<DrillIntent> {
        (*self.dispatch.borrow()).expect("drill dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<services::QuizSession> {
        (*self.session.borrow()).expect("drill session registered")
    }
}
