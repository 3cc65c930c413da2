// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles for the bar glyphs.
//!
//! Glyph colors are fixed regardless of theme, so the tips are too: a dark
//! chip that reads the same over the light bar and the black surface.

use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
pub use iced::widget::tooltip::Position;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Dark chip with light text and a soft drop shadow.
pub fn tip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::GRAY_900
        })),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette::GRAY_700,
        },
        shadow: Shadow {
            color: Color {
                a: opacity::SHADOW,
                ..palette::BLACK
            },
            offset: Vector::new(0.0, spacing::XXS),
            blur_radius: spacing::SM,
        },
        text_color: Some(palette::GRAY_200),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
///
/// ```ignore
/// use crate::ui::styles::tooltip;
///
/// tooltip::styled(pause_button, i18n.tr("controls-pause-tooltip"), tooltip::Position::Right)
/// ```
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: impl Into<String>,
    position: Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let chip = Container::new(Text::new(label.into()).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(tip);

    tooltip(content, chip, position).gap(spacing::XS)
}
