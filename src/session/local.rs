// SPDX-License-Identifier: MPL-2.0
//! In-memory player-state owner.
//!
//! `LocalSession` keeps the whole [`Props`] snapshot behind a mutex and applies
//! requests after an optional artificial latency, which makes the asynchronous
//! request/confirm cycle of the overlay observable without a real player.

use super::{CommandInterface, Options, PlayerSession, Props, Request};
use crate::error::SessionError;
use futures_util::future::BoxFuture;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
struct Shared {
    props: Props,
    options: Options,
}

/// Owner that lives entirely in process memory.
#[derive(Clone)]
pub struct LocalSession {
    shared: Arc<Mutex<Shared>>,
    latency: Duration,
    command_interface: Option<Arc<LocalCommandInterface>>,
}

impl std::fmt::Debug for LocalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSession")
            .field("props", &self.props())
            .field("latency", &self.latency)
            .field("mouse_sync", &self.command_interface.is_some())
            .finish()
    }
}

impl LocalSession {
    /// Creates a session seeded with `props` and `options`.
    #[must_use]
    pub fn new(props: Props, options: Options) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared { props, options })),
            latency: Duration::ZERO,
            command_interface: None,
        }
    }

    /// Delays every request by `latency` before applying it.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Attaches a command interface so mouse sync requests are delivered.
    #[must_use]
    pub fn with_command_interface(mut self) -> Self {
        self.command_interface = Some(Arc::new(LocalCommandInterface::default()));
        self
    }

    /// The attached command interface, if any.
    #[must_use]
    pub fn local_command_interface(&self) -> Option<&LocalCommandInterface> {
        self.command_interface.as_deref()
    }

    /// Changes the host capabilities at runtime.
    pub fn set_options(&self, options: Options) {
        if let Ok(mut shared) = self.shared.lock() {
            shared.options = options;
        }
    }

    fn apply_now(shared: &Mutex<Shared>, request: Request) -> Result<(), SessionError> {
        let mut guard = shared.lock().map_err(|_| SessionError::Unavailable)?;
        let shared = &mut *guard;
        let props = &mut shared.props;
        match request {
            Request::SetAutolock(value) => props.autolock = value,
            Request::SetMobileControls(value) => props.mobile_controls = value,
            Request::SetMirroredControls(value) => props.mirrored_controls = value,
            Request::SetSensitivity(value) => props.sensitivity = value,
            Request::SetScaleControls(value) => props.scale_controls = value,
            Request::SetPause(value) => props.pause = value,
            Request::SetMute(value) => props.mute = value,
            Request::ToggleKeyboard => props.keyboard = !props.keyboard,
            Request::ToggleFullscreen => {
                if shared.options.no_fullscreen {
                    return Err(SessionError::Rejected("fullscreen not supported".into()));
                }
                props.fullscreen = !props.fullscreen;
            }
            Request::OpenSideBar => props.side_bar = true,
            Request::CloseSideBar => props.side_bar = false,
            Request::SetActionBar(value) => props.action_bar = value,
            Request::SendMouseSync => {}
        }
        Ok(())
    }
}

impl PlayerSession for LocalSession {
    fn props(&self) -> Props {
        self.shared
            .lock()
            .map(|shared| shared.props)
            .unwrap_or_default()
    }

    fn options(&self) -> Options {
        self.shared
            .lock()
            .map(|shared| shared.options)
            .unwrap_or_default()
    }

    fn apply(&self, request: Request) -> BoxFuture<'static, Result<(), SessionError>> {
        let shared = Arc::clone(&self.shared);
        let latency = self.latency;
        Box::pin(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            Self::apply_now(&shared, request)
        })
    }

    fn command_interface(&self) -> Option<Arc<dyn CommandInterface>> {
        self.command_interface
            .clone()
            .map(|ci| ci as Arc<dyn CommandInterface>)
    }

    fn viewport_changed(&self, width: f32, height: f32) {
        if let Ok(mut shared) = self.shared.lock() {
            shared.props.portrait = height > width;
        }
    }
}

/// Command interface that counts the syncs it received.
#[derive(Debug, Default)]
pub struct LocalCommandInterface {
    mouse_syncs: AtomicU32,
}

impl LocalCommandInterface {
    /// Number of mouse syncs delivered so far.
    #[must_use]
    pub fn mouse_syncs(&self) -> u32 {
        self.mouse_syncs.load(Ordering::Relaxed)
    }
}

impl CommandInterface for LocalCommandInterface {
    fn send_mouse_sync(&self) {
        let count = self.mouse_syncs.fetch_add(1, Ordering::Relaxed) + 1;
        log::info!("mouse sync sent ({count} so far)");
    }
}
