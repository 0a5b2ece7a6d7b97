// SPDX-License-Identifier: MPL-2.0
//! Toast display lifecycle.
//!
//! `ToastView` owns the single active toast and its countdown. The
//! countdown is a scoped resource: it is armed when a toast is shown,
//! rearmed when the toast is replaced, and canceled when the toast is
//! cleared or the view is dropped. A retired display can never produce a
//! dismissal event, and each display produces at most one.

use crate::panel;
use crate::toast::Toast;
use iced::widget::Space;
use iced::{time, Element, Subscription};
use std::time::{Duration, Instant};

/// How often the countdown is polled while a toast is on screen.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Messages produced by the toast panel and its countdown.
#[derive(Debug, Clone)]
pub enum Message {
    /// The panel or its close control was clicked.
    Dismiss,
    /// Periodic clock tick while a toast is displayed.
    Tick(Instant),
}

/// Emitted to the host when the active toast is dismissed.
///
/// The host decides what to do next: drop the toast, show another one,
/// or hand the dismissal to whatever sequences its notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The active display ended, by click or by countdown expiry.
    Dismissed,
}

/// An armed display: the toast on screen and its countdown bounds.
#[derive(Debug)]
struct Display {
    toast: Toast,
    shown_at: Instant,
    deadline: Instant,
}

/// Renders at most one transient toast and reports its dismissal.
///
/// With no active toast the view renders nothing and runs no timer.
#[derive(Debug, Default)]
pub struct ToastView {
    active: Option<Display>,
}

impl ToastView {
    /// Creates an empty view with no active toast.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Displays `toast`, replacing any active display.
    ///
    /// The previous display (if any) is retired without a dismissal event;
    /// its countdown can never fire. A fresh countdown is armed for the
    /// new toast's duration.
    pub fn show(&mut self, toast: Toast) {
        self.show_at(toast, Instant::now());
    }

    fn show_at(&mut self, toast: Toast, now: Instant) {
        let deadline = now + toast.duration();
        self.active = Some(Display {
            toast,
            shown_at: now,
            deadline,
        });
    }

    /// Removes the active toast, if any, without emitting a dismissal.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Returns the toast currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.active.as_ref().map(|display| &display.toast)
    }

    /// Returns whether a toast is currently displayed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Fraction of the countdown still remaining at `now`, in `0.0..=1.0`.
    ///
    /// Returns `0.0` when no toast is active.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> f32 {
        let Some(display) = &self.active else {
            return 0.0;
        };

        // The effective duration is never zero (see `Toast::duration`).
        let total = display.deadline - display.shown_at;
        let left = display.deadline.saturating_duration_since(now);
        (left.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Handles a panel or countdown message.
    ///
    /// Returns [`Event::Dismissed`] the first time the active display is
    /// dismissed; messages aimed at an already retired display are no-ops.
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Dismiss => self.active.take().map(|_| Event::Dismissed),
            Message::Tick(now) => self.expire_at(now),
        }
    }

    fn expire_at(&mut self, now: Instant) -> Option<Event> {
        match &self.active {
            Some(display) if now >= display.deadline => {
                self.active = None;
                Some(Event::Dismissed)
            }
            _ => None,
        }
    }

    /// Countdown clock, running only while a toast is displayed.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.active.is_some() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Renders the toast overlay, or nothing when inactive.
    pub fn view(&self) -> Element<'_, Message> {
        match &self.active {
            Some(display) => {
                panel::overlay(&display.toast, self.remaining_fraction(Instant::now()))
            }
            None => Space::new().into(),
        }
    }
}
