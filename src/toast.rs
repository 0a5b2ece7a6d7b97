// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` descriptor and `Category` enum used
//! throughout the crate. A `Toast` is constructed by the host application
//! and handed to the view for a single display cycle; the view never
//! mutates it.

use crate::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Countdown applied when a toast carries no duration of its own.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Semantic classification of a toast, driving its visual treatment.
///
/// Descriptors may arrive from outside the process (configuration, IPC),
/// so deserialization maps any unrecognized category string to
/// [`Category::Unknown`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Something went wrong (red).
    Error,
    /// Degraded but not blocking (orange).
    Warning,
    /// Neutral informational message (blue).
    Info,
    /// Fallback for category values this crate does not recognize.
    Unknown,
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            _ => Self::Unknown,
        }
    }
}

impl Category {
    /// Returns the accent color for this category.
    #[must_use]
    pub fn accent(&self) -> Color {
        match self {
            Category::Success => palette::SUCCESS_500,
            Category::Error => palette::ERROR_500,
            Category::Warning => palette::WARNING_500,
            Category::Info => palette::INFO_500,
            Category::Unknown => palette::GRAY_400,
        }
    }

    /// Returns the icon glyph for this category.
    ///
    /// Text glyphs render consistently across platforms without shipping
    /// image assets.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Success => "\u{2713}", // ✓
            Category::Error => "\u{2715}",   // ✕
            Category::Warning => "\u{26A0}", // ⚠
            Category::Info => "\u{2139}",    // ℹ
            Category::Unknown => "\u{25CF}", // ● generic fallback
        }
    }
}

/// A transient notification to be displayed to the user.
///
/// The descriptor is read-only from the view's perspective: it is handed
/// over for one display cycle and dropped once the display is retired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    /// Semantic category (determines accent color and glyph).
    #[serde(default)]
    category: Category,
    /// Short headline, always shown.
    title: String,
    /// Optional longer body text; omitted from the panel when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    /// Custom countdown overriding [`DEFAULT_DURATION`], in milliseconds
    /// on the wire.
    #[serde(
        default,
        rename = "duration_ms",
        with = "duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    duration: Option<Duration>,
}

impl Toast {
    /// Creates a new toast with the given category and title.
    pub fn new(category: Category, title: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            message: None,
            duration: None,
        }
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Category::Success, title)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Category::Error, title)
    }

    /// Creates a warning toast.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Category::Warning, title)
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Category::Info, title)
    }

    /// Adds a longer body text below the title.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets a custom countdown, overriding [`DEFAULT_DURATION`].
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional body text.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the effective countdown for this toast.
    ///
    /// A zero custom duration is treated as absent: the descriptor format
    /// only admits positive durations.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
            .filter(|d| !d.is_zero())
            .unwrap_or(DEFAULT_DURATION)
    }
}

/// Serde adapter mapping `Option<Duration>` to integer milliseconds.
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => serializer.serialize_some(&u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        let millis = Option::<u64>::deserialize(deserializer)?;
        Ok(millis.map(Duration::from_millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_correct_category() {
        assert_eq!(Toast::success("").category(), Category::Success);
        assert_eq!(Toast::error("").category(), Category::Error);
        assert_eq!(Toast::warning("").category(), Category::Warning);
        assert_eq!(Toast::info("").category(), Category::Info);
    }

    #[test]
    fn accent_colors_are_distinct() {
        let categories = [
            Category::Success,
            Category::Error,
            Category::Warning,
            Category::Info,
            Category::Unknown,
        ];

        for (i, a) in categories.iter().enumerate() {
            for b in &categories[i + 1..] {
                assert_ne!(a.accent(), b.accent());
            }
        }
    }

    #[test]
    fn glyphs_are_distinct() {
        let categories = [
            Category::Success,
            Category::Error,
            Category::Warning,
            Category::Info,
            Category::Unknown,
        ];

        for (i, a) in categories.iter().enumerate() {
            for b in &categories[i + 1..] {
                assert_ne!(a.glyph(), b.glyph());
            }
        }
    }

    #[test]
    fn duration_defaults_to_five_seconds() {
        assert_eq!(Toast::info("test").duration(), DEFAULT_DURATION);
        assert_eq!(DEFAULT_DURATION, Duration::from_millis(5000));
    }

    #[test]
    fn custom_duration_overrides_default() {
        let toast = Toast::info("test").with_duration(Duration::from_millis(2000));
        assert_eq!(toast.duration(), Duration::from_millis(2000));
    }

    #[test]
    fn zero_duration_falls_back_to_default() {
        let toast = Toast::info("test").with_duration(Duration::ZERO);
        assert_eq!(toast.duration(), DEFAULT_DURATION);
    }

    #[test]
    fn builder_pattern_works() {
        let toast = Toast::warning("disk almost full")
            .with_message("Less than 1 GB remaining.")
            .with_duration(Duration::from_secs(8));

        assert_eq!(toast.category(), Category::Warning);
        assert_eq!(toast.title(), "disk almost full");
        assert_eq!(toast.message(), Some("Less than 1 GB remaining."));
        assert_eq!(toast.duration(), Duration::from_secs(8));
    }

    #[test]
    fn message_is_absent_by_default() {
        assert_eq!(Toast::success("saved").message(), None);
    }

    #[test]
    fn unknown_category_string_deserializes_to_fallback() {
        let toast: Toast =
            serde_json::from_str(r#"{ "category": "bogus", "title": "hello" }"#).unwrap();
        assert_eq!(toast.category(), Category::Unknown);
        assert_eq!(toast.title(), "hello");
    }

    #[test]
    fn descriptor_round_trips_through_json() {
        let toast = Toast::error("save failed")
            .with_message("Permission denied.")
            .with_duration(Duration::from_millis(2000));

        let json = serde_json::to_string(&toast).unwrap();
        let back: Toast = serde_json::from_str(&json).unwrap();
        assert_eq!(back, toast);
    }

    #[test]
    fn absent_optional_fields_deserialize_to_defaults() {
        let toast: Toast = serde_json::from_str(r#"{ "title": "hello" }"#).unwrap();
        assert_eq!(toast.category(), Category::Success);
        assert_eq!(toast.message(), None);
        assert_eq!(toast.duration(), DEFAULT_DURATION);
    }
}
