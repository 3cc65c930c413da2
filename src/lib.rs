// SPDX-License-Identifier: MPL-2.0
//! `player_overlay` is the on-screen control overlay of an emulator player,
//! built with the Iced GUI framework.
//!
//! The overlay renders an action bar with mouse and virtual-control popovers
//! and pause/mute/keyboard/fullscreen toggles. It never owns player state:
//! it reads a snapshot from a [`session::PlayerSession`] and sends it
//! requests.

#![doc(html_root_url = "https://docs.rs/player_overlay/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod session;
pub mod ui;

#[cfg(test)]
mod test_utils;
