// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the overlay's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii

## Examples

```
use player_overlay::ui::design_tokens::{palette, sizing, opacity};
use iced::Color;

let popover_bg = Color {
    a: opacity::SURFACE,
    ..palette::GRAY_200
};

let icon = sizing::ICON_MD; // 24px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.9, 0.9, 0.91);

    // Semantic colors
    /// Active toggles and highlighted entries.
    pub const ACTIVE_400: Color = Color::from_rgb(0.204, 0.827, 0.6);
    /// Paused state.
    pub const ALERT_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;

    /// Drop shadow under tooltips
    pub const SHADOW: f32 = 0.25;

    /// Surface background - Semi-transparent bars and popovers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;

    /// Width of the vertical action bar (icon plus padding).
    pub const ACTION_BAR_WIDTH: f32 = 40.0;

    /// Height of an inline popover.
    pub const POPOVER_HEIGHT: f32 = 32.0;

    /// Width of the demo side bar panel.
    pub const SIDE_BAR_WIDTH: f32 = 240.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - Surface status line
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Labels in popovers
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Separator between the action bar header and the controls.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const MD: f32 = 6.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);
    assert!(opacity::SHADOW < opacity::OVERLAY_STRONG);

    // Icons must fit inside the action bar with padding on both sides.
    assert!(sizing::ACTION_BAR_WIDTH >= sizing::ICON_MD + 2.0 * spacing::XS);
    assert!(sizing::POPOVER_HEIGHT >= sizing::ICON_MD);
};
