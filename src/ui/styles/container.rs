// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Light gray strip behind the action bar.
pub fn action_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: Some(palette::GRAY_900),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            color: Color {
                a: 0.3,
                ..palette::BLACK
            },
            offset: iced::Vector::new(1.0, 0.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}

/// Popover strip opening to the right of its menu glyph.
///
/// Only the right corners are rounded so the strip reads as attached to the bar.
pub fn popover(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::GRAY_200
        })),
        text_color: Some(palette::GRAY_900),
        border: Border {
            radius: iced::border::Radius {
                top_left: radius::NONE,
                top_right: radius::MD,
                bottom_right: radius::MD,
                bottom_left: radius::NONE,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Player surface behind the overlay.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::GRAY_200),
        ..Default::default()
    }
}

/// Generic panel surface used for the side bar.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so the panel stays readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popover_is_translucent() {
        let style = popover(&Theme::Light);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.a < 1.0);
    }

    #[test]
    fn panel_follows_theme() {
        let light = panel(&Theme::Light);
        let dark = panel(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }
}
