use dioxus::prelude::*;
use phonics_core::games::LetterCase;
use phonics_core::quiz::QuizPhase;
use phonics_core::time::fixed_now;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::test_harness::{ViewKind, setup_view_harness};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn full_app_marks_introduction_as_active() {
    let mut harness = setup_view_harness(ViewKind::FullApp);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Reading Adventures"), "missing header in {html}");
    assert!(html.contains(r#"id="introduction""#), "missing section in {html}");
    assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1, "{html}");
    assert_eq!(html.matches(r#"aria-pressed="false""#).count(), 5, "{html}");
    assert!(html.contains("Letters A-Z"), "missing nav label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn letters_view_renders_every_card() {
    let mut harness = setup_view_harness(ViewKind::Letters);
    harness.rebuild();
    let html = harness.render();

    assert_eq!(html.matches(r#"role="button""#).count(), 26);
    assert!(html.contains("Letter A, example: Apple"), "missing aria label in {html}");
    assert!(html.contains(r#"data-index="25""#), "missing last card in {html}");
    assert!(html.contains("Play sound for letter Z"), "missing audio button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sounds_and_blending_views_render_labels() {
    let mut harness = setup_view_harness(ViewKind::Sounds);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Letter M makes the muh sound"), "missing sound label in {html}");
    assert!(html.contains("as in Mouse"), "missing example in {html}");

    let mut harness = setup_view_harness(ViewKind::Blending);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Practice blending the word CAT"), "missing word card in {html}");
    assert!(html.contains("C + A + T"), "missing sounds in {html}");
    assert_eq!(html.matches(r#"role="button""#).count(), 8);
}

#[tokio::test(flavor = "current_thread")]
async fn games_view_starts_idle() {
    let mut harness = setup_view_harness(ViewKind::Games);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("👆 Pick a letter!"), "missing idle prompt in {html}");
    assert!(html.contains("Find words that rhyme with"), "missing rhyme prompt in {html}");
    assert!(html.contains(r#"id="rhyme-target""#), "missing target in {html}");
    assert!(html.contains("Play Sound"), "missing detective button in {html}");
    assert!(!html.contains("answer-btn correct"), "nothing should be marked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_runs_to_results() {
    let mut harness = setup_view_harness(ViewKind::Assessment);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start Quiz"), "missing start control in {html}");
    assert!(html.contains("Ready to start!"), "missing progress label in {html}");

    let dispatch = harness.quiz_handles.dispatch();
    dispatch.call(QuizIntent::Start);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "missing heading in {html}");
    assert!(!html.contains("Start Quiz"), "start control should hide in {html}");

    dispatch.call(QuizIntent::Answer(3));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("answer-btn incorrect"), "missing wrong mark in {html}");
    assert!(html.contains("answer-btn correct"), "missing right mark in {html}");
    assert!(html.contains("Next Question"), "missing next control in {html}");
    assert!(
        html.contains("Incorrect answer. The correct answer is highlighted in green."),
        "missing announcement in {html}"
    );

    dispatch.call(QuizIntent::Next);
    for pick in [1, 1, 1, 2] {
        dispatch.call(QuizIntent::Answer(pick));
        dispatch.call(QuizIntent::Next);
    }
    harness.drive();
    let html = harness.render();
    assert_eq!(harness.quiz_handles.engine().read().phase(), QuizPhase::Completed);
    assert!(
        html.contains("You got 4 out of 5 questions correct! (80%)"),
        "missing summary in {html}"
    );
    assert!(html.contains("Assessment complete!"), "missing progress label in {html}");

    dispatch.call(QuizIntent::Restart);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Start Quiz"), "start control should return in {html}");
    assert!(html.contains("width: 0%;"), "progress should reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_survives_leaving_the_section() {
    let mut harness = setup_view_harness(ViewKind::Assessment);
    harness.rebuild();

    let dispatch = harness.quiz_handles.dispatch();
    dispatch.call(QuizIntent::Start);
    dispatch.call(QuizIntent::Answer(0));
    dispatch.call(QuizIntent::Next);
    harness.drive();
    assert!(harness.render().contains("Question 2 of 5"));

    harness.show(ViewKind::Introduction);
    assert!(!harness.render().contains("Question 2 of 5"));

    harness.show(ViewKind::Assessment);
    let html = harness.render();
    assert!(html.contains("Question 2 of 5"), "quiz restarted in {html}");
    assert!(!html.contains("Start Quiz"), "start control should stay hidden in {html}");
    assert!(html.contains("Progress: 20%"), "progress lost in {html}");
    assert_eq!(harness.quiz_handles.engine().read().score(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn game_marks_survive_leaving_the_section() {
    let mut harness = setup_view_harness(ViewKind::Games);
    harness.rebuild();

    let sessions = harness.sessions();
    let (mut detective, mut letter_match) = (sessions.detective, sessions.letter_match);
    harness.dom.in_runtime(|| {
        let hidden = detective.write().play_sound(&mut StdRng::seed_from_u64(7));
        detective.write().check(hidden).unwrap();
        letter_match
            .write()
            .select(LetterCase::Upper, 'B', fixed_now())
            .unwrap();
    });
    harness.drive();
    assert!(harness.render().contains("Correct! Great listening!"));

    harness.show(ViewKind::Letters);
    harness.show(ViewKind::Games);
    let html = harness.render();
    assert!(html.contains("Correct! Great listening!"), "detective marks lost in {html}");
    assert_eq!(
        html.matches("answer-btn correct").count(),
        2,
        "detective mark or letter match selection lost in {html}"
    );
}
