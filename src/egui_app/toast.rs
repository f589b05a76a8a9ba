/**
 * Toast Notifications
 *
 * A single overlay notification shown after a login attempt. Each toast
 * carries its own deadline; the frame loop polls `expire` and asks egui to
 * repaint at the deadline, so no timer thread is involved.
 *
 * # Lifecycle
 *
 * 1. `show` replaces whatever is visible and returns a fresh `ToastId`
 * 2. The close button calls `dismiss(id)`; a stale id is ignored
 * 3. `expire(now)` removes the toast once its deadline has passed
 */

use std::time::{Duration, Instant};

/// How long a toast stays visible unless closed first
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Handle for one shown toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// Visual flavour of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
    pub deadline: Instant,
}

/// Holds at most one toast
#[derive(Debug, Clone)]
pub struct Toaster {
    current: Option<Toast>,
    next_id: u64,
    duration: Duration,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(TOAST_DURATION)
    }
}

impl Toaster {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            next_id: 0,
            duration,
        }
    }

    /// Show a toast, replacing (and cancelling the deadline of) any current one
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.current = Some(Toast {
            id,
            message: message.into(),
            kind,
            shown_at: now,
            deadline: now + self.duration,
        });
        id
    }

    /// Close the toast `id` if it is still the visible one
    ///
    /// Returns whether anything was closed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
            return true;
        }
        false
    }

    /// Drop the toast once its deadline has passed
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|toast| now >= toast.deadline) {
            self.current = None;
            return true;
        }
        false
    }

    /// Remove any toast unconditionally
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Deadline of the visible toast, for scheduling a repaint
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|toast| toast.deadline)
    }

    /// Time left before the visible toast expires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Fraction of the display time still left, from 1.0 down to 0.0
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let remaining = self.remaining(now)?;
        if self.duration.is_zero() {
            return Some(0.0);
        }
        Some((remaining.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_four_seconds() {
        let t0 = Instant::now();
        let mut toaster = Toaster::default();
        toaster.show("Login realizado com sucesso!", ToastKind::Success, t0);

        assert!(!toaster.expire(t0 + Duration::from_millis(3999)));
        assert!(toaster.current().is_some());

        assert!(toaster.expire(t0 + TOAST_DURATION));
        assert!(toaster.current().is_none());
    }

    #[test]
    fn test_show_replaces_and_resets_deadline() {
        let t0 = Instant::now();
        let mut toaster = Toaster::default();
        toaster.show("first", ToastKind::Error, t0);
        let second = toaster.show("second", ToastKind::Error, t0 + Duration::from_secs(3));

        // The first deadline has passed, the second has not.
        assert!(!toaster.expire(t0 + Duration::from_secs(5)));
        let toast = toaster.current().unwrap();
        assert_eq!(toast.id, second);
        assert_eq!(toast.message, "second");
    }

    #[test]
    fn test_stale_dismiss_is_ignored() {
        let t0 = Instant::now();
        let mut toaster = Toaster::default();
        let first = toaster.show("first", ToastKind::Error, t0);
        let second = toaster.show("second", ToastKind::Success, t0);

        assert!(!toaster.dismiss(first));
        assert_eq!(toaster.current().map(|t| t.id), Some(second));

        assert!(toaster.dismiss(second));
        assert!(toaster.current().is_none());
    }

    #[test]
    fn test_progress_shrinks() {
        let t0 = Instant::now();
        let mut toaster = Toaster::default();
        assert_eq!(toaster.progress(t0), None);

        toaster.show("msg", ToastKind::Success, t0);
        assert_eq!(toaster.progress(t0), Some(1.0));
        let half = toaster.progress(t0 + Duration::from_secs(2)).unwrap();
        assert!((half - 0.5).abs() < 1e-3);
        assert_eq!(toaster.progress(t0 + Duration::from_secs(10)), Some(0.0));
        assert_eq!(toaster.remaining(t0 + Duration::from_secs(1)), Some(Duration::from_secs(3)));
    }
}
