use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::TutorialServices;

use crate::App;
use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{
    AssessmentView, BlendingView, GamesView, IntroductionView, LettersView, LiveRegion,
    SessionState, SoundsView, use_feedback_provider, use_session_provider,
};

#[derive(Clone)]
struct TestApp {
    tutorial: TutorialServices,
}

impl UiApp for TestApp {
    fn tutorial(&self) -> TutorialServices {
        self.tutorial.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Introduction,
    Letters,
    Sounds,
    Blending,
    Games,
    Assessment,
    FullApp,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
    switch: SectionSwitch,
}

/// Lets a test swap the mounted section, the way the router does, and reach
/// the page-level session state.
#[derive(Clone, Default)]
pub struct SectionSwitch {
    shown: Rc<RefCell<Option<Signal<ViewKind>>>>,
    sessions: Rc<RefCell<Option<SessionState>>>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz_handles.clone());
    use_context_provider(|| props.switch.clone());
    if props.view == ViewKind::FullApp {
        rsx! { App {} }
    } else {
        rsx! { SectionHarness {} }
    }
}

#[component]
fn SectionHarness() -> Element {
    use_feedback_provider();
    let sessions = use_session_provider();
    let initial = use_context::<ViewKind>();
    let shown = use_signal(|| initial);
    use_context_provider(|| shown);
    let switch = use_context::<SectionSwitch>();
    use_hook(|| {
        *switch.shown.borrow_mut() = Some(shown);
        *switch.sessions.borrow_mut() = Some(sessions);
    });
    rsx! {
        Router::<TestRoute> {}
        LiveRegion {}
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let shown = use_context::<Signal<ViewKind>>();
    match shown() {
        ViewKind::Introduction | ViewKind::FullApp => rsx! { IntroductionView {} },
        ViewKind::Letters => rsx! { LettersView {} },
        ViewKind::Sounds => rsx! { SoundsView {} },
        ViewKind::Blending => rsx! { BlendingView {} },
        ViewKind::Games => rsx! { GamesView {} },
        ViewKind::Assessment => rsx! { AssessmentView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: QuizTestHandles,
    switch: SectionSwitch,
}

impl ViewHarness {
    /// Unmounts the current section and mounts `view` in its place.
    pub fn show(&mut self, view: ViewKind) {
        let mut shown = (*self.switch.shown.borrow()).expect("section harness mounted");
        self.dom.in_runtime(|| shown.set(view));
        self.drive();
    }

    pub fn sessions(&self) -> SessionState {
        (*self.switch.sessions.borrow()).expect("section harness mounted")
    }

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

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let quiz_handles = QuizTestHandles::default();
    let switch = SectionSwitch::default();
    let app = Arc::new(TestApp {
        tutorial: TutorialServices::for_tests(),
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
            switch: switch.clone(),
        },
    );
    ViewHarness {
        dom,
        quiz_handles,
        switch,
    }
}
