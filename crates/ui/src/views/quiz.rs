use dioxus::prelude::*;
use phonics_core::sections::Section;

use super::feedback::FeedbackState;
use super::sessions::SessionState;
use crate::context::AppContext;
use crate::vm::{QuizIntent, map_quiz};

#[cfg(test)]
use phonics_core::quiz::QuizEngine;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn AssessmentView() -> Element {
    let ctx = use_context::<AppContext>();
    let feedback = use_context::<FeedbackState>();
    let mut engine = use_context::<SessionState>().quiz;

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let quiz = ctx.quiz();
        let mut live = feedback.live;
        match intent {
            QuizIntent::Start => {
                if let Err(err) = quiz.start(&mut engine.write()) {
                    tracing::debug!(error = %err, "quiz start ignored");
                }
            }
            QuizIntent::Answer(selected) => {
                match quiz.answer(&mut engine.write(), &mut live.write(), selected) {
                    Ok(answer) => feedback.expire_announcement(answer.announcement),
                    Err(err) => tracing::debug!(error = %err, "quiz answer ignored"),
                }
            }
            QuizIntent::Next => match quiz.next(&mut engine.write(), &mut live.write()) {
                Ok(advance) => {
                    if let Some(id) = advance.announcement {
                        feedback.expire_announcement(id);
                    }
                }
                Err(err) => tracing::debug!(error = %err, "quiz advance ignored"),
            },
            QuizIntent::Restart => {
                quiz.restart(&mut engine.write());
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, engine);
            }
        }
    }

    let vm = map_quiz(&engine.read());
    let section = Section::Assessment;

    rsx! {
        section { id: section.id(), class: "content-section active",
            h2 { "{section.title()}" }
            div { class: "progress-bar",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{vm.progress}",
                div { id: "progress-fill", class: "progress-fill", style: "{vm.progress_style()}",
                    "{vm.progress_text()}"
                }
            }
            p { id: "progress-text", class: "progress-text", "{vm.progress_label}" }

            div { id: "quiz-container",
                if let Some(question) = vm.question.clone() {
                    div { class: "question",
                        h5 { "{question.heading}" }
                        p { class: "question-prompt", "{question.prompt}" }
                        div { class: "answer-options",
                            for option in question.options {
                                button {
                                    key: "{option.index}",
                                    class: "{option.class}",
                                    "data-index": "{option.index}",
                                    disabled: option.disabled,
                                    onclick: move |_| dispatch_intent.call(QuizIntent::Answer(option.index)),
                                    "{option.label}"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "quiz-controls",
                if vm.controls.show_start {
                    button {
                        id: "start-quiz-btn",
                        class: "nav-btn",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Start),
                        "Start Quiz"
                    }
                }
                if vm.controls.show_next {
                    button {
                        id: "next-question-btn",
                        class: "nav-btn",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Next),
                        "Next Question"
                    }
                }
            }

            if vm.controls.show_results {
                div { id: "results-container", class: "results",
                    h4 { "Quiz Complete!" }
                    p { id: "final-score", {vm.summary.clone().unwrap_or_default()} }
                    button {
                        class: "nav-btn",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Restart),
                        "Try Again"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    engine: Rc<RefCell<Option<Signal<QuizEngine>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, engine: Signal<QuizEngine>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.engine.borrow_mut() = Some(engine);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn engine(&self) -> Signal<QuizEngine> {
        (*self.engine.borrow()).expect("quiz engine registered")
    }
}
