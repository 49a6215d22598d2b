use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator, use_route};
use phonics_core::sections::Section;

use crate::views::{
    AssessmentView, AudioToast, BlendingView, FeedbackState, GamesView, IntroductionView,
    LettersView, LiveRegion, SoundsView,
};
use crate::vm::map_nav_buttons;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", IntroductionView)] Introduction {},
        #[route("/letters", LettersView)] Letters {},
        #[route("/sounds", SoundsView)] Sounds {},
        #[route("/blending", BlendingView)] Blending {},
        #[route("/games", GamesView)] Games {},
        #[route("/assessment", AssessmentView)] Assessment {},
}

impl Route {
    #[must_use]
    pub fn section(&self) -> Section {
        match self {
            Route::Introduction {} => Section::Introduction,
            Route::Letters {} => Section::Letters,
            Route::Sounds {} => Section::Sounds,
            Route::Blending {} => Section::Blending,
            Route::Games {} => Section::Games,
            Route::Assessment {} => Section::Assessment,
        }
    }

    #[must_use]
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Introduction => Route::Introduction {},
            Section::Letters => Route::Letters {},
            Section::Sounds => Route::Sounds {},
            Section::Blending => Route::Blending {},
            Section::Games => Route::Games {},
            Section::Assessment => Route::Assessment {},
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Reading Adventures" }
                p { class: "tagline", "Learn letters, sounds and words one step at a time." }
            }
            NavBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            LiveRegion {}
            AudioToast {}
        }
    }
}

#[component]
fn NavBar() -> Element {
    let feedback = use_context::<FeedbackState>();
    let navigator = use_navigator();
    let active = use_route::<Route>().section();

    rsx! {
        nav { class: "main-nav", aria_label: "Tutorial sections",
            for item in map_nav_buttons(active) {
                button {
                    key: "{item.section.id()}",
                    class: "{item.class}",
                    aria_pressed: "{item.pressed}",
                    onclick: move |_| {
                        feedback.announce(item.section.announcement());
                        navigator.push(Route::for_section(item.section));
                    },
                    "{item.label}"
                }
            }
        }
    }
}
