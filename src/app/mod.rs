// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the overlay widgets and
//! the player owner.
//!
//! The `App` struct wires together the session, localization and the widget
//! states, and translates component events into request batches executed as
//! Iced tasks. Props are re-read from the session after every settled batch;
//! widgets only ever render from that snapshot.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::session::{LocalSession, PlayerSession, Props};
use crate::ui::theming::ThemeMode;
use crate::ui::{action_bar, controls};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    session: Arc<dyn PlayerSession>,
    /// Last snapshot read from the session.
    props: Props,
    action_bar: action_bar::State,
    /// Controls row mounted while in portrait layout.
    portrait_controls: Option<controls::State>,
    /// Whether the overlay runs inside the full player portal.
    portal: bool,
    theme_mode: ThemeMode,
    window_id: Option<window::Id>,
    /// Window mode last requested from the windowing system.
    fullscreen_applied: bool,
    /// Translation key of a startup problem shown on the surface.
    startup_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("props", &self.props)
            .field("portal", &self.portal)
            .field("window_id", &self.window_id)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed on the
    // first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        log::set_max_level(config.general.log_level_filter());
        if let Some(key) = &config_warning {
            log::warn!("settings not loaded, using defaults ({key})");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut session = LocalSession::new(config.initial_props(), config.options())
            .with_latency(config.session.latency());
        let mouse_sync = config
            .controls
            .mouse_sync
            .unwrap_or(config::DEFAULT_MOUSE_SYNC)
            && !flags.no_mouse_sync;
        if mouse_sync {
            session = session.with_command_interface();
        }
        let portal = config.layout.portal.unwrap_or(config::DEFAULT_PORTAL) && !flags.no_portal;

        let mut app = Self::with_session(Arc::new(session), i18n, portal);
        app.theme_mode = config.general.theme_mode;
        app.startup_warning = config_warning;

        log::debug!("overlay started: {app:?}");
        (app, Task::none())
    }

    /// Builds the application around an existing session.
    pub fn with_session(session: Arc<dyn PlayerSession>, i18n: I18n, portal: bool) -> Self {
        let props = session.props();
        let mut portrait_controls = None;
        controls::sync_mount(&mut portrait_controls, props.portrait, &props);
        Self {
            i18n,
            action_bar: action_bar::State::new(&props),
            portrait_controls,
            props,
            session,
            portal,
            theme_mode: ThemeMode::default(),
            window_id: None,
            fullscreen_applied: false,
            startup_warning: None,
        }
    }

    /// Current props snapshot.
    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::window_events()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.handle_message(message)
    }

    fn view(&self) -> Element<'_, Message> {
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use crate::session::{Options, Request};
    use crate::test_utils::{assert_abs_diff_eq, F64_EPSILON};
    use crate::ui::controls::mouse;
    use futures_util::future::BoxFuture;

    /// Owner that refuses every request and never changes.
    struct Refusing(Props);

    impl PlayerSession for Refusing {
        fn props(&self) -> Props {
            self.0
        }

        fn options(&self) -> Options {
            Options::default()
        }

        fn apply(&self, _request: Request) -> BoxFuture<'static, Result<(), SessionError>> {
            Box::pin(async { Err(SessionError::Unavailable) })
        }
    }

    fn sensitivity_click() -> Message {
        Message::ActionBar(action_bar::Message::Controls(controls::Message::Mouse(
            mouse::Message::CycleSensitivity,
        )))
    }

    #[test]
    fn optimistic_shadow_survives_failed_request() {
        let props = Props {
            autolock: true,
            sensitivity: 1.0,
            ..Props::default()
        };
        let mut app = App::with_session(Arc::new(Refusing(props)), I18n::default(), true);

        let _ = app.update(sensitivity_click());
        let _ = app.update(Message::SessionSettled(Err(SessionError::Unavailable.into())));

        let shadow = app
            .action_bar
            .controls()
            .map(|c| c.mouse.sensitivity)
            .unwrap_or_default();
        assert_abs_diff_eq!(shadow, 1.1, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(app.props().sensitivity, 1.0, epsilon = F64_EPSILON);
    }

    #[test]
    fn settling_refreshes_props_and_mount() {
        let session = Arc::new(LocalSession::new(Props::default(), Options::default()));
        let mut app = App::with_session(session.clone(), I18n::default(), true);
        assert!(app.action_bar.controls().is_some());

        session.viewport_changed(400.0, 800.0);
        let _ = app.update(Message::SessionSettled(Ok(())));
        assert!(app.props().portrait);
        assert!(app.action_bar.controls().is_none());
        assert!(app.portrait_controls.is_some());
    }

    #[test]
    fn window_resize_tracks_portrait() {
        let session = Arc::new(LocalSession::new(Props::default(), Options::default()));
        let mut app = App::with_session(session, I18n::default(), true);
        let id = window::Id::unique();

        let _ = app.update(Message::WindowResized {
            id,
            size: iced::Size::new(400.0, 900.0),
        });
        assert_eq!(app.window_id, Some(id));
        assert!(app.props().portrait);

        let _ = app.update(Message::WindowResized {
            id,
            size: iced::Size::new(900.0, 400.0),
        });
        assert!(!app.props().portrait);
    }

    #[test]
    fn bubbling_click_closes_open_side_bar_once() {
        let props = Props {
            side_bar: true,
            ..Props::default()
        };
        assert_eq!(
            update::surface_requests(&props, &[]),
            vec![Request::CloseSideBar]
        );
        assert!(update::surface_requests(&props, &[Request::CloseSideBar]).is_empty());
        assert!(update::surface_requests(&Props::default(), &[]).is_empty());
    }
}
