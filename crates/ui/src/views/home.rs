use dioxus::prelude::*;
use phonics_core::catalog::{ALPHABET, CVC_WORDS, QUIZ_QUESTIONS};
use phonics_core::sections::Section;

#[component]
pub fn IntroductionView() -> Element {
    let section = Section::Introduction;

    rsx! {
        section { id: section.id(), class: "content-section active",
            h2 { "{section.title()}" }
            p {
                "Reading starts with sounds. This tutorial walks through the alphabet, "
                "the sound each letter makes, and how those sounds blend into words."
            }
            h3 { "What you will practice" }
            ul { class: "intro-list",
                li { "{ALPHABET.len()} letters, each with an example word" }
                li { "Letter sounds you can play as often as you like" }
                li { "Blending {CVC_WORDS.len()} short words sound by sound" }
                li { "Three matching games" }
                li { "A {QUIZ_QUESTIONS.len()}-question check of what you learned" }
            }
            p { class: "intro-tip",
                "Tip: use the arrow keys to move between cards, Enter or Space to play one, "
                "and Escape to jump back to the menu."
            }
        }
    }
}
