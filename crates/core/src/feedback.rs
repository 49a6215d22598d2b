//! Cancellable, self-expiring UI slots.
//!
//! A slot holds at most one piece of transient feedback. Showing new feedback
//! cancels whatever expiry was pending for the old one: each `show` hands out a
//! fresh `Ticket`, and only the current ticket can clear the slot. A timer that
//! fires late with an old ticket is a no-op.

use chrono::{DateTime, Utc};

/// Identifies one scheduled expiry of a `FeedbackSlot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    value: T,
    ticket: Ticket,
    expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSlot<T> {
    generation: u64,
    current: Option<Pending<T>>,
}

impl<T> Default for FeedbackSlot<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            current: None,
        }
    }
}

impl<T> FeedbackSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `value` until `expires_at`, replacing anything already shown.
    pub fn show(&mut self, value: T, expires_at: DateTime<Utc>) -> Ticket {
        self.replace(value, Some(expires_at))
    }

    /// Shows `value` until it is replaced or cleared explicitly.
    pub fn show_until_replaced(&mut self, value: T) -> Ticket {
        self.replace(value, None)
    }

    fn replace(&mut self, value: T, expires_at: Option<DateTime<Utc>>) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        let ticket = Ticket(self.generation);
        self.current = Some(Pending {
            value,
            ticket,
            expires_at,
        });
        ticket
    }

    /// Clears the slot if `ticket` is still the current one.
    ///
    /// Returns `true` when something was cleared.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if self.ticket() == Some(ticket) {
            self.current = None;
            return true;
        }
        false
    }

    /// Clears the slot if its deadline is at or before `now`.
    pub fn expire_due(&mut self, now: DateTime<Utc>) -> bool {
        let due = self
            .current
            .as_ref()
            .and_then(|pending| pending.expires_at)
            .is_some_and(|at| at <= now);
        if due {
            self.current = None;
        }
        due
    }

    /// Clears the slot and invalidates every outstanding ticket.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.current = None;
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.current.as_ref().map(|pending| &pending.value)
    }

    #[must_use]
    pub fn ticket(&self) -> Option<Ticket> {
        self.current.as_ref().map(|pending| pending.ticket)
    }

    #[must_use]
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.current.as_ref().and_then(|pending| pending.expires_at)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    #[test]
    fn stale_ticket_does_not_clear_newer_feedback() {
        let now = fixed_now();
        let mut slot = FeedbackSlot::new();
        let first = slot.show("first", now + Duration::seconds(2));
        let second = slot.show("second", now + Duration::seconds(3));

        assert!(!slot.expire(first));
        assert_eq!(slot.get(), Some(&"second"));
        assert!(slot.expire(second));
        assert!(slot.is_empty());
    }

    #[test]
    fn expire_due_respects_deadline() {
        let now = fixed_now();
        let mut slot = FeedbackSlot::new();
        slot.show(1, now + Duration::seconds(3));

        assert!(!slot.expire_due(now + Duration::milliseconds(2999)));
        assert!(slot.expire_due(now + Duration::seconds(3)));
        assert!(slot.get().is_none());
    }

    #[test]
    fn unbounded_feedback_ignores_sweeps() {
        let now = fixed_now();
        let mut slot = FeedbackSlot::new();
        let ticket = slot.show_until_replaced("kept");

        assert!(!slot.expire_due(now + Duration::days(1)));
        assert_eq!(slot.get(), Some(&"kept"));

        slot.clear();
        assert!(!slot.expire(ticket));
        assert!(slot.is_empty());
    }
}
