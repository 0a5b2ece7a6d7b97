// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` renders transient notifications ("toasts") for applications
//! built with the Iced GUI framework.
//!
//! Given a [`Toast`] descriptor, [`ToastView`] shows a styled, auto-expiring
//! banner with a close control and a depleting countdown track, and reports
//! the dismissal back to the host exactly once per display, whether the
//! user clicked the panel or the countdown ran out.
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::{Event, Toast, ToastView};
//!
//! // Keep a view in your application state.
//! let mut toasts = ToastView::new();
//!
//! // Show a toast; any toast already on screen is replaced and its
//! // countdown canceled.
//! toasts.show(Toast::success("Image saved"));
//!
//! // Route the view's messages through your update function.
//! if let Some(Event::Dismissed) = toasts.update(message) {
//!     // The toast is gone; show the next one if you have a queue.
//! }
//!
//! // Wire the countdown clock and the overlay into your application.
//! let subscription = toasts.subscription().map(Message::Toast);
//! let overlay = toasts.view().map(Message::Toast);
//! ```
//!
//! # Design Considerations
//!
//! - One toast at a time: the view renders nothing when given no toast,
//!   and replacing the active toast retires the old display silently.
//!   Queuing and stacking are left to the host.
//! - The countdown is a scoped resource: the timer subscription exists
//!   only while a toast is on screen and vanishes on replacement, clear,
//!   or view teardown.
//! - Unrecognized category strings deserialize to a fallback presentation
//!   instead of failing.

pub mod design_tokens;
pub mod panel;
pub mod toast;
pub mod view;

pub use toast::{Category, Toast, DEFAULT_DURATION};
pub use view::{Event, Message, ToastView};
