// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Borderless button wrapping a single glyph or short label.
///
/// The glyph carries the state through its tint, so the button itself only
/// shows a faint background on hover and press.
pub fn icon(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = palette::GRAY_900;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: 1.0 - opacity::OVERLAY_HOVER,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: 1.0 - opacity::OVERLAY_STRONG,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

/// Numeric label inside a popover: active color unless it reads neutral.
pub fn value_label(neutral: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = icon(theme, status);
        let text_color = if neutral {
            palette::GRAY_900
        } else {
            palette::ACTIVE_400
        };
        button::Style { text_color, ..base }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_button_is_transparent_at_rest() {
        let style = icon(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
    }

    #[test]
    fn icon_button_highlights_on_hover() {
        let style = icon(&Theme::Dark, button::Status::Hovered);
        assert!(style.background.is_some());
    }

    #[test]
    fn value_label_uses_active_color_off_neutral() {
        let theme = Theme::Light;
        let neutral = value_label(true)(&theme, button::Status::Active);
        let changed = value_label(false)(&theme, button::Status::Active);
        assert_eq!(neutral.text_color, palette::GRAY_900);
        assert_eq!(changed.text_color, palette::ACTIVE_400);
    }
}
