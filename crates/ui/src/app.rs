use dioxus::prelude::*;
use dioxus_router::Router;
use phonics_core::announcer::{FAULT_MESSAGE, READY_MESSAGE};
use phonics_core::navigation::KeyAction;

use crate::routes::Route;
use crate::views::{
    focus_first_nav, install_focus_binding, use_feedback_provider, use_session_provider,
    watch_script_faults,
};

#[component]
pub fn App() -> Element {
    let feedback = use_feedback_provider();
    use_session_provider();

    use_effect(move || {
        spawn(async move {
            if install_focus_binding().await {
                tracing::debug!("focus binding installed");
            }
        });
        spawn(watch_script_faults(move |message| {
            tracing::error!(%message, "script fault");
            feedback.announce(FAULT_MESSAGE);
        }));
        feedback.announce(READY_MESSAGE);
        tracing::info!("tutorial ready");
    });

    let on_key = move |evt: KeyboardEvent| {
        if KeyAction::from_key_name(&evt.key().to_string()) == KeyAction::ReturnToNav {
            focus_first_nav();
        }
    };

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Reading Adventures" }

        div { class: "app-root", onkeydown: on_key,
            ErrorBoundary { handle_error: fault_fallback, Router::<Route> {} }
        }
    }
}

/// Shown in place of the sections after a render fault. "Try again" clears
/// the fault and renders the sections anew.
pub(crate) fn fault_fallback(errors: ErrorContext) -> Element {
    tracing::error!(?errors, "view fault");
    rsx! {
        div { class: "fatal",
            h1 { "Something went wrong" }
            div { class: "sr-only", aria_live: "assertive", aria_atomic: "true",
                "{FAULT_MESSAGE}"
            }
            p { "{FAULT_MESSAGE}" }
            button {
                class: "nav-btn",
                onclick: move |_| errors.clear_errors(),
                "Try again"
            }
        }
    }
}
