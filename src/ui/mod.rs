// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes `Message`, `State`, `update` returning an event, and a `view`
//! taking a `ViewContext`.
//!
//! # Components
//!
//! - [`action_bar`] - Vertical bar hosting the controls and the side bar toggle
//! - [`controls`] - Mouse/virtual popovers and the four toggles
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode
//! - [`icons`] - Embedded SVG glyphs and tints

pub mod action_bar;
pub mod controls;
pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod theming;
