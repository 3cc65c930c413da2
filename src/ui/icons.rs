// SPDX-License-Identifier: MPL-2.0
//! Centralized module for the overlay's SVG glyphs.
//!
//! Glyphs are 24×24 outline SVGs embedded at compile time via `include_bytes!`
//! from `assets/icons/`. Each handle is parsed once and cached in a `OnceLock`.
//! The stroke color in the files is irrelevant: every glyph is recolored at
//! render time through [`tinted`].
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons::{self, Tint};
//!
//! let pause = icons::tinted(icons::pause(), Tint::Normal);
//! ```

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning an `ICON_MD`-sized `Svg` backed by a
/// cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            sized(Svg::new(handle.clone()), sizing::ICON_MD)
        }
    };
}

// =============================================================================
// Mouse Controls
// =============================================================================

define_icon!(cursor, "cursor.svg", "Arrow pointer: click-to-lock mouse mode.");
define_icon!(
    cursor_click,
    "cursor_click.svg",
    "Pointer with click rays: automatic mouse lock."
);
define_icon!(refresh, "refresh.svg", "Circular arrows: mouse sync.");

// =============================================================================
// Virtual Controls
// =============================================================================

define_icon!(eye_off, "eye_off.svg", "Crossed eye: virtual controls hidden.");
define_icon!(
    device_mobile,
    "device_mobile.svg",
    "Phone outline: mobile virtual controls."
);
define_icon!(
    switch_horizontal,
    "switch_horizontal.svg",
    "Opposed arrows: mirrored virtual controls."
);

// =============================================================================
// Toggles
// =============================================================================

define_icon!(play, "play.svg", "Triangle pointing right.");
define_icon!(pause, "pause.svg", "Two vertical bars.");
define_icon!(volume_up, "volume_up.svg", "Speaker with sound waves.");
define_icon!(volume_off, "volume_off.svg", "Speaker crossed out.");
define_icon!(pencil_alt, "pencil_alt.svg", "Pencil: on-screen keyboard.");
define_icon!(arrows_expand, "arrows_expand.svg", "Four corners: fullscreen.");

// =============================================================================
// Action Bar
// =============================================================================

define_icon!(dots_horizontal, "dots_horizontal.svg", "Three dots: side bar.");
define_icon!(
    chevron_double_left,
    "chevron_double_left.svg",
    "Double chevron left: hide the action bar."
);
define_icon!(
    chevron_double_right,
    "chevron_double_right.svg",
    "Double chevron right: show the action bar."
);

/// Resizes a glyph to a square of `size` pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Color role of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    /// Dark glyph on the light bar surface.
    #[default]
    Normal,
    /// Toggle is on, or the entry is the current selection.
    Active,
    /// Attention state (paused).
    Alert,
    /// Inactive secondary affordance.
    Muted,
}

impl Tint {
    /// Active when `on`, normal otherwise.
    #[must_use]
    pub fn active_if(on: bool) -> Self {
        if on {
            Tint::Active
        } else {
            Tint::Normal
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Tint::Normal => palette::GRAY_900,
            Tint::Active => palette::ACTIVE_400,
            Tint::Alert => palette::ALERT_400,
            Tint::Muted => palette::GRAY_700,
        }
    }
}

/// Applies a tint to a glyph.
pub fn tinted(icon: Svg<'_>, tint: Tint) -> Svg<'_> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(tint.color()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSETS: &[&str] = &[
        "cursor.svg",
        "cursor_click.svg",
        "refresh.svg",
        "eye_off.svg",
        "device_mobile.svg",
        "switch_horizontal.svg",
        "play.svg",
        "pause.svg",
        "volume_up.svg",
        "volume_off.svg",
        "pencil_alt.svg",
        "arrows_expand.svg",
        "dots_horizontal.svg",
        "chevron_double_left.svg",
        "chevron_double_right.svg",
    ];

    #[test]
    fn assets_are_svg_documents() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/icons");
        for name in ASSETS {
            let content = std::fs::read_to_string(dir.join(name)).unwrap();
            assert!(content.starts_with("<svg"), "{name} is not an SVG document");
        }
    }

    #[test]
    fn icon_functions_build() {
        let _ = tinted(play(), Tint::Alert);
        let _ = tinted(pause(), Tint::Normal);
        let _ = sized(refresh(), 16.0);
    }

    #[test]
    fn tints_resolve_to_distinct_colors() {
        assert_eq!(Tint::Active.color(), palette::ACTIVE_400);
        assert_eq!(Tint::Alert.color(), palette::ALERT_400);
        assert_ne!(Tint::Normal.color(), Tint::Muted.color());
    }

    #[test]
    fn active_if_picks_active_tint() {
        assert_eq!(Tint::active_if(true), Tint::Active);
        assert_eq!(Tint::active_if(false), Tint::Normal);
    }
}
