use dioxus::prelude::ReadableExt;
use drill_core::{Dictionary, Level, VerbForm};

use crate::vm::DrillIntent;

use super::test_harness::{ViewKind, setup_view_harness, test_dictionary};

const THREE_VERBS: &[(&str, &str, &str, &str)] = &[
    ("go", "went", "gone", "идти"),
    ("see", "saw", "seen", "видеть"),
    ("take", "took", "taken", "брать"),
];

/// Opening `<tag ...>` of the first element whose attributes mention `marker`.
fn opening_tag<'a>(html: &'a str, tag: &str, marker: &str) -> Option<&'a str> {
    html.match_indices(&format!("<{tag} "))
        .map(|(start, _)| {
            let end = html[start..].find('>').map_or(html.len(), |offset| start + offset);
            &html[start..end]
        })
        .find(|opening| opening.contains(marker))
}

fn is_disabled(opening: Option<&str>) -> bool {
    opening.expect("element rendered").contains("disabled")
}

#[test]
fn verbs_view_smoke_renders_sheet() {
    let mut harness = setup_view_harness(ViewKind::Verbs, test_dictionary(THREE_VERBS), 5);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Irregular Verbs",
        "Past simple",
        "Past participle",
        "Level 1",
        "Level 3",
        "go",
        "see",
        "take",
        "идти",
        "to check",
        "No more verbs at this level",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("verbs-input--wrong"), "unexpected grading in {html}");
}

#[test]
fn verbs_view_smoke_checks_and_locks_answers() {
    let mut harness = setup_view_harness(
        ViewKind::Verbs,
        test_dictionary(&[("go", "went", "gone", "идти")]),
        5,
    );
    harness.rebuild();
    let dispatch = harness.handles.dispatch();
    let session = harness.handles.session();

    harness.dom.in_runtime(|| {
        dispatch.call(DrillIntent::Edit {
            position: 0,
            form: VerbForm::Simple,
            text: "Went".to_string(),
        });
        dispatch.call(DrillIntent::Edit {
            position: 0,
            form: VerbForm::Participle,
            text: "goed".to_string(),
        });
        dispatch.call(DrillIntent::Check);
    });
    harness.drive();

    let (simple_locked, participle_locked) = harness.dom.in_runtime(|| {
        let session = session.peek();
        (
            session.is_locked(0, VerbForm::Simple),
            session.is_locked(0, VerbForm::Participle),
        )
    });
    assert!(simple_locked);
    assert!(!participle_locked);

    let html = harness.render();
    assert!(html.contains("verbs-input--correct"), "missing correct field in {html}");
    assert!(html.contains("verbs-input--wrong"), "missing wrong field in {html}");
    assert!(html.contains("1 of 2 answers correct"), "missing score in {html}");
    assert!(is_disabled(opening_tag(&html, "input", "verbs-input--correct")), "{html}");
    assert!(!is_disabled(opening_tag(&html, "input", "verbs-input--wrong")), "{html}");

    harness.dom.in_runtime(|| {
        dispatch.call(DrillIntent::Edit {
            position: 0,
            form: VerbForm::Simple,
            text: "goed".to_string(),
        });
    });
    harness.drive();
    let html = harness.render();
    assert!(html.contains("already correct"), "missing lock error in {html}");
}

#[test]
fn verbs_view_smoke_reset_clears_grading() {
    let mut harness = setup_view_harness(ViewKind::Verbs, test_dictionary(THREE_VERBS), 2);
    harness.rebuild();
    let dispatch = harness.handles.dispatch();
    let session = harness.handles.session();
    assert!(!is_disabled(opening_tag(&harness.render(), "button", "Add word")));

    harness.dom.in_runtime(|| {
        dispatch.call(DrillIntent::AddWord);
        dispatch.call(DrillIntent::Check);
    });
    harness.drive();
    let drawn = harness.dom.in_runtime(|| session.peek().words().len());
    assert_eq!(drawn, 3);
    let html = harness.render();
    assert!(html.contains("No more verbs at this level"), "{html}");
    assert!(is_disabled(opening_tag(&html, "button", "Add word")), "{html}");

    harness.dom.in_runtime(|| dispatch.call(DrillIntent::Reset));
    harness.drive();
    let (drawn, graded) = harness
        .dom
        .in_runtime(|| (session.peek().words().len(), session.peek().result().is_some()));
    assert_eq!(drawn, 2);
    assert!(!graded);
    let html = harness.render();
    assert!(html.contains("1 verb left"), "{html}");
    assert!(!is_disabled(opening_tag(&html, "button", "Add word")), "{html}");
}

#[test]
fn verbs_view_smoke_changes_level() {
    let mut harness = setup_view_harness(ViewKind::Verbs, Dictionary::builtin(), 5);
    harness.rebuild();
    let dispatch = harness.handles.dispatch();
    let session = harness.handles.session();

    harness
        .dom
        .in_runtime(|| dispatch.call(DrillIntent::ChangeLevel(Level::Three)));
    harness.drive();

    let (level, drawn) = harness
        .dom
        .in_runtime(|| (session.peek().level(), session.peek().words().len()));
    assert_eq!(level, Level::Three);
    assert_eq!(drawn, 5);
}

#[test]
fn home_view_smoke_links_to_the_drill() {
    let mut harness = setup_view_harness(ViewKind::Home, Dictionary::builtin(), 5);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Irregular Verbs"), "missing link in {html}");
    assert!(html.contains("starting at Level 1"), "missing level in {html}");
}
