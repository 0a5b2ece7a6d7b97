// SPDX-License-Identifier: MPL-2.0
//! Toast panel rendering.
//!
//! The panel is a fixed-width card with a category glyph, the title, the
//! optional body text, an explicit close control, and a thin progress
//! track that depletes over the countdown. The whole card is clickable;
//! any click dismisses the toast.

use crate::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::toast::Toast;
use crate::view::Message;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Renders the full-area overlay holding the toast card.
///
/// The card sits in the bottom-right corner with padding; the rest of the
/// overlay is empty and lets the page underneath show through.
pub fn overlay(toast: &Toast, remaining: f32) -> Element<'_, Message> {
    Container::new(card(toast, remaining))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

/// Renders the toast card itself.
///
/// `remaining` is the fraction of the countdown left, in `0.0..=1.0`.
pub fn card(toast: &Toast, remaining: f32) -> Element<'_, Message> {
    let category = toast.category();
    let accent = category.accent();

    let glyph = Text::new(category.glyph())
        .size(sizing::ICON_MD)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let title = Text::new(toast.title())
        .size(typography::BODY_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    // The body text line is omitted entirely when the descriptor has none.
    let mut text_block = Column::new().spacing(spacing::XXS).push(title);
    if let Some(message) = toast.message() {
        text_block = text_block.push(
            Text::new(message)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );
    }

    let close_button = button(Text::new("\u{2715}").size(typography::CAPTION))
        .on_press(Message::Dismiss)
        .padding(spacing::XXS)
        .style(close_button_style);

    // Layout: [glyph] [title / message] [close]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(glyph).padding(spacing::XXS))
        .push(
            Container::new(text_block)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(close_button);

    let card = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(content)
            .push(progress_track(accent, remaining)),
    )
    .width(Length::Fixed(sizing::TOAST_WIDTH))
    .padding(spacing::SM)
    .style(move |theme: &Theme| card_style(theme, accent));

    // The close button captures its own press, so the surrounding
    // mouse_area never observes it and dismissal cannot double-fire.
    mouse_area(card).on_press(Message::Dismiss).into()
}

/// Thin bar showing how much of the countdown remains.
fn progress_track(accent: Color, remaining: f32) -> Element<'static, Message> {
    let fill = Container::new(Space::new())
        .width(Length::Fixed(track_fill_width(remaining)))
        .height(Length::Fixed(sizing::PROGRESS_TRACK))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(accent)),
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Container::new(fill)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_TRACK))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Width in pixels of the filled portion of the progress track.
fn track_fill_width(remaining: f32) -> f32 {
    // Usable width is the card width minus its horizontal padding.
    let usable = sizing::TOAST_WIDTH - 2.0 * spacing::SM;
    usable * remaining.clamp(0.0, 1.0)
}

/// Style function for the toast card.
fn card_style(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(tint(base, accent, opacity::ACCENT_TINT))),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Mixes `amount` of `accent` into `base`, keeping the result opaque.
fn tint(base: Color, accent: Color, amount: f32) -> Color {
    let mix = |b: f32, a: f32| b + (a - b) * amount;
    Color {
        r: mix(base.r, accent.r),
        g: mix(base.g, accent.g),
        b: mix(base.b, accent.b),
        a: base.a,
    }
}

/// Style function for the close control.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Category;
    use approx::assert_relative_eq;

    #[test]
    fn card_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = Category::Success.accent();
        let style = card_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn card_backgrounds_are_distinct_per_category() {
        let theme = Theme::Dark;
        let base = theme.extended_palette().background.base.color;

        let backgrounds: Vec<Color> = [
            Category::Success,
            Category::Error,
            Category::Warning,
            Category::Info,
            Category::Unknown,
        ]
        .iter()
        .map(|category| tint(base, category.accent(), opacity::ACCENT_TINT))
        .collect();

        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn track_fill_spans_usable_width_when_full() {
        let usable = sizing::TOAST_WIDTH - 2.0 * spacing::SM;
        assert_relative_eq!(track_fill_width(1.0), usable);
    }

    #[test]
    fn track_fill_is_empty_when_depleted() {
        assert_relative_eq!(track_fill_width(0.0), 0.0);
    }

    #[test]
    fn track_fill_clamps_out_of_range_fractions() {
        let usable = sizing::TOAST_WIDTH - 2.0 * spacing::SM;
        assert_relative_eq!(track_fill_width(1.5), usable);
        assert_relative_eq!(track_fill_width(-0.5), 0.0);
    }

    #[test]
    fn tint_preserves_opacity() {
        let base = Color::from_rgb(0.1, 0.1, 0.1);
        let tinted = tint(base, Category::Error.accent(), opacity::ACCENT_TINT);
        assert_relative_eq!(tinted.a, base.a);
    }
}
