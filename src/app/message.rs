// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::{action_bar, controls};
use iced::{window, Size};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ActionBar(action_bar::Message),
    /// Controls row shown under the surface in portrait layout.
    PortraitControls(controls::Message),
    /// Click on the player surface, or a click bubbling up to it.
    SurfaceClicked,
    /// Restores the action bar hidden in fullscreen.
    ShowActionBar,
    /// Close button of the side bar panel.
    CloseSideBar,
    /// A request batch finished, successfully or not.
    SessionSettled(Result<(), Error>),
    WindowResized {
        id: window::Id,
        size: Size,
    },
}

/// Runtime flags passed from the command line into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PLAYER_OVERLAY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Forces the non-portal layout regardless of the config file.
    pub no_portal: bool,
    /// Detaches the command interface so mouse sync becomes a no-op.
    pub no_mouse_sync: bool,
}
