use std::sync::Arc;
use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use phonics_core::Clock;
use phonics_core::announcer::{AnnouncementId, Announcer};
use phonics_core::feedback::{FeedbackSlot, Ticket};
use services::{AudioCue, AudioService};

use crate::context::AppContext;

/// Shared live region and audio toast. Provided once at the root.
///
/// Expiry and speech tasks run in the root scope, so they finish even when
/// the section that started them is left.
#[derive(Clone, Copy, PartialEq)]
pub struct FeedbackState {
    pub live: Signal<Announcer>,
    pub toast: Signal<FeedbackSlot<String>>,
    clock: Clock,
    announcement_ttl: Duration,
    toast_ttl: Duration,
}

pub(crate) fn to_std(duration: chrono::Duration) -> Duration {
    duration.to_std().unwrap_or(Duration::ZERO)
}

/// Creates the feedback state for this tree and provides it as context.
pub fn use_feedback_provider() -> FeedbackState {
    let ctx = use_context::<AppContext>();
    let settings = ctx.settings();
    let live = use_signal(|| ctx.tutorial().new_announcer());
    let toast = use_signal(FeedbackSlot::new);
    use_context_provider(|| FeedbackState {
        live,
        toast,
        clock: ctx.clock(),
        announcement_ttl: to_std(settings.announcement()),
        toast_ttl: to_std(settings.toast()),
    })
}

impl FeedbackState {
    pub fn announce(self, message: impl Into<String>) -> AnnouncementId {
        let mut live = self.live;
        let id = live.write().announce(message, self.clock.now());
        self.expire_announcement(id);
        id
    }

    /// Removes an announcement some service already placed in the region.
    pub fn expire_announcement(self, id: AnnouncementId) {
        let mut live = self.live;
        let ttl = self.announcement_ttl;
        spawn_forever(async move {
            tokio::time::sleep(ttl).await;
            live.write().remove(id);
        });
    }

    pub fn expire_toast(self, ticket: Ticket) {
        let mut toast = self.toast;
        let ttl = self.toast_ttl;
        spawn_forever(async move {
            tokio::time::sleep(ttl).await;
            toast.write().expire(ticket);
        });
    }

    /// Schedules the clean-up for a cue and plays its speech.
    pub fn play(self, cue: AudioCue, audio: Arc<AudioService>) {
        self.expire_announcement(cue.announcement);
        self.expire_toast(cue.toast);
        if cue.plan.is_empty() {
            return;
        }
        spawn_forever(async move {
            audio.speech().play(cue.plan).await;
        });
    }

    pub fn play_letter(self, audio: Arc<AudioService>, letter: char) {
        let mut live = self.live;
        let mut toast = self.toast;
        let cue = audio.play_letter(letter, &mut live.write(), &mut toast.write());
        self.play(cue, audio);
    }

    pub fn play_phonetic(self, audio: Arc<AudioService>, sound: &str) {
        let mut live = self.live;
        let mut toast = self.toast;
        let cue = audio.play_phonetic(sound, &mut live.write(), &mut toast.write());
        self.play(cue, audio);
    }

    pub fn play_blending(self, audio: Arc<AudioService>, word: &str) {
        let mut live = self.live;
        let mut toast = self.toast;
        let cue = audio.play_blending(word, &mut live.write(), &mut toast.write());
        self.play(cue, audio);
    }
}

/// Polite, atomic region screen readers watch for announcements.
#[component]
pub fn LiveRegion() -> Element {
    let feedback = use_context::<FeedbackState>();
    let live = feedback.live.read();

    rsx! {
        div { id: "live-region", class: "sr-only",
            for announcement in live.live() {
                div {
                    key: "{announcement.id.value()}",
                    aria_live: "polite",
                    aria_atomic: "true",
                    "{announcement.message}"
                }
            }
        }
    }
}

/// Floating "Playing: ..." note shown while audio plays.
#[component]
pub fn AudioToast() -> Element {
    let feedback = use_context::<FeedbackState>();
    let toast = feedback.toast.read();

    rsx! {
        if let Some(message) = toast.get() {
            div { class: "audio-toast", role: "status", "{message}" }
        }
    }
}
