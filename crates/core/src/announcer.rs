//! Screen-reader live region.
//!
//! Each announcement lives for a fixed duration and then removes itself.
//! Announcements are independent of each other; a hard cap keeps the region
//! bounded even when sweeps run late.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

/// Most announcements kept in the region at once. The oldest is dropped first.
pub const MAX_LIVE_ANNOUNCEMENTS: usize = 8;

pub const READY_MESSAGE: &str = "Reading Adventures tutorial is ready!";
pub const FAULT_MESSAGE: &str = "An error occurred. Please refresh the page if needed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnouncementId(u64);

impl AnnouncementId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcer {
    next_id: u64,
    live: VecDeque<Announcement>,
    ttl: Duration,
}

impl Announcer {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            next_id: 0,
            live: VecDeque::new(),
            ttl,
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Adds `message` to the region until `now + ttl`.
    pub fn announce(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> AnnouncementId {
        self.next_id = self.next_id.wrapping_add(1);
        let id = AnnouncementId(self.next_id);
        while self.live.len() >= MAX_LIVE_ANNOUNCEMENTS {
            self.live.pop_front();
        }
        self.live.push_back(Announcement {
            id,
            message: message.into(),
            expires_at: now + self.ttl,
        });
        id
    }

    /// Timer callback for one announcement. Unknown ids are ignored.
    pub fn remove(&mut self, id: AnnouncementId) -> bool {
        let before = self.live.len();
        self.live.retain(|announcement| announcement.id != id);
        self.live.len() != before
    }

    /// Drops every announcement whose time is up. Returns how many were removed.
    pub fn sweep(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.live.len();
        self.live.retain(|announcement| announcement.expires_at > now);
        before - self.live.len()
    }

    pub fn live(&self) -> impl Iterator<Item = &Announcement> {
        self.live.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Announcement> {
        self.live.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl Default for Announcer {
    fn default() -> Self {
        Self::new(Duration::seconds(1))
    }
}
