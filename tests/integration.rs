// SPDX-License-Identifier: MPL-2.0
use player_overlay::app::config;
use player_overlay::domain::controls::{format_label, ControlMode, LockMode};
use futures_util::future::BoxFuture;
use player_overlay::error::SessionError;
use player_overlay::i18n::fluent::I18n;
use player_overlay::session::{
    dispatch_all, dispatch_batch, LocalSession, Options, PlayerSession, Props, Request,
};
use player_overlay::ui::action_bar;
use player_overlay::ui::controls::{self, mouse, virtual_controls, Propagation};
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

/// Runs one controls message against the live session, the way the app does.
async fn click(
    session: &Arc<LocalSession>,
    state: &mut controls::State,
    message: controls::Message,
    portal: bool,
) -> Result<(), SessionError> {
    let props = session.props();
    let event = controls::update(state, message, &props, portal);
    dispatch_batch(session.clone(), event.requests, event.sequencing).await
}

/// Owner that refuses pause changes and forwards everything else.
struct PauseLocked {
    inner: LocalSession,
    seen: std::sync::Mutex<Vec<Request>>,
}

impl PlayerSession for PauseLocked {
    fn props(&self) -> Props {
        self.inner.props()
    }

    fn options(&self) -> Options {
        self.inner.options()
    }

    fn apply(&self, request: Request) -> BoxFuture<'static, Result<(), SessionError>> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request);
        }
        match request {
            Request::SetPause(_) => Box::pin(async { Err(SessionError::Unavailable) }),
            other => self.inner.apply(other),
        }
    }
}

#[tokio::test]
async fn pause_toggle_round_trips_against_owner() {
    let session = Arc::new(LocalSession::new(
        Props {
            side_bar: true,
            ..Props::default()
        },
        Options::default(),
    ));
    let mut state = controls::State::new(&session.props());

    click(&session, &mut state, controls::Message::TogglePause, true)
        .await
        .expect("pause accepted");
    let props = session.props();
    assert!(props.pause);
    assert!(!props.side_bar);

    click(&session, &mut state, controls::Message::TogglePause, true)
        .await
        .expect("resume accepted");
    assert!(!session.props().pause);
}

#[tokio::test]
async fn repeated_set_pause_is_idempotent() {
    let session = Arc::new(LocalSession::new(Props::default(), Options::default()));
    for _ in 0..2 {
        dispatch_all(session.clone(), vec![Request::SetPause(true)])
            .await
            .expect("accepted");
        assert!(session.props().pause);
    }
}

#[tokio::test]
async fn mobile_selection_clears_mirrored_after_enabling_mobile() {
    let session = Arc::new(
        LocalSession::new(
            Props {
                mirrored_controls: true,
                ..Props::default()
            },
            Options::default(),
        )
        .with_latency(Duration::from_millis(5)),
    );
    let mut state = controls::State::new(&session.props());

    click(
        &session,
        &mut state,
        controls::Message::Virtual(virtual_controls::Message::Select(ControlMode::Mobile)),
        true,
    )
    .await
    .expect("selection accepted");

    let props = session.props();
    assert!(props.mobile_controls);
    assert!(!props.mirrored_controls);
    assert_eq!(
        ControlMode::from_flags(props.mobile_controls, props.mirrored_controls),
        ControlMode::Mobile
    );
}

#[tokio::test]
async fn mirrored_wins_until_hidden_is_selected() {
    let session = Arc::new(LocalSession::new(
        Props {
            mobile_controls: true,
            mirrored_controls: true,
            ..Props::default()
        },
        Options::default(),
    ));
    let props = session.props();
    assert_eq!(
        ControlMode::from_flags(props.mobile_controls, props.mirrored_controls),
        ControlMode::Mirrored
    );

    let mut state = controls::State::new(&props);
    click(
        &session,
        &mut state,
        controls::Message::Virtual(virtual_controls::Message::Select(ControlMode::Hidden)),
        true,
    )
    .await
    .expect("selection accepted");

    let props = session.props();
    assert!(!props.mobile_controls);
    assert!(!props.mirrored_controls);
}

#[tokio::test]
async fn portal_mouse_flow_selects_lock_and_syncs() {
    let session = Arc::new(
        LocalSession::new(Props::default(), Options::default()).with_command_interface(),
    );
    let mut state = controls::State::new(&session.props());

    click(
        &session,
        &mut state,
        controls::Message::Mouse(mouse::Message::MenuClicked),
        true,
    )
    .await
    .expect("no requests");
    assert!(state.mouse.open);

    click(
        &session,
        &mut state,
        controls::Message::Mouse(mouse::Message::Sync),
        true,
    )
    .await
    .expect("sync delivered");
    assert!(!state.mouse.open);
    assert_eq!(
        session
            .local_command_interface()
            .map(|ci| ci.mouse_syncs()),
        Some(1)
    );

    click(
        &session,
        &mut state,
        controls::Message::Mouse(mouse::Message::MenuClicked),
        true,
    )
    .await
    .expect("no requests");
    click(
        &session,
        &mut state,
        controls::Message::Mouse(mouse::Message::SelectLock(LockMode::Auto)),
        true,
    )
    .await
    .expect("lock accepted");
    assert!(session.props().autolock);
    assert!(!mouse::sync_visible(&state.mouse, true, true));
}

#[tokio::test]
async fn sensitivity_cycles_through_the_owner_and_wraps() {
    let session = Arc::new(LocalSession::new(
        Props {
            autolock: true,
            sensitivity: 2.0,
            ..Props::default()
        },
        Options::default(),
    ));
    let mut state = controls::State::new(&session.props());
    let cycle = controls::Message::Mouse(mouse::Message::CycleSensitivity);

    click(&session, &mut state, cycle, true).await.expect("accepted");
    assert_eq!(format_label(session.props().sensitivity), "2.1");

    click(&session, &mut state, cycle, true).await.expect("accepted");
    assert_eq!(format_label(session.props().sensitivity), "0.1");
    assert_eq!(format_label(state.mouse.sensitivity), "0.1");
}

#[tokio::test]
async fn rejected_fullscreen_still_closes_side_bar() {
    let session = Arc::new(LocalSession::new(
        Props {
            side_bar: true,
            ..Props::default()
        },
        Options {
            no_fullscreen: true,
        },
    ));
    let mut state = controls::State::new(&session.props());

    let result = click(&session, &mut state, controls::Message::ToggleFullscreen, true).await;
    assert!(matches!(result, Err(SessionError::Rejected(_))));

    let props = session.props();
    assert!(!props.fullscreen);
    assert!(!props.side_bar);
    assert!(!controls::toggles(session.options().no_fullscreen)
        .contains(&controls::Message::ToggleFullscreen));
}

#[tokio::test]
async fn failed_pause_does_not_keep_side_bar_open() {
    let session = Arc::new(PauseLocked {
        inner: LocalSession::new(
            Props {
                side_bar: true,
                ..Props::default()
            },
            Options::default(),
        )
        .with_latency(Duration::from_millis(5)),
        seen: std::sync::Mutex::new(Vec::new()),
    });
    let mut state = controls::State::new(&session.props());

    let props = session.props();
    let event = controls::update(&mut state, controls::Message::TogglePause, &props, true);
    let result = dispatch_batch(session.clone(), event.requests, event.sequencing).await;

    assert!(matches!(result, Err(SessionError::Unavailable)));
    assert!(session
        .seen
        .lock()
        .expect("lock")
        .contains(&Request::CloseSideBar));
    let props = session.props();
    assert!(!props.side_bar);
    assert!(!props.pause);
}

#[tokio::test]
async fn hiding_the_bar_in_fullscreen_unmounts_controls() {
    let session = Arc::new(LocalSession::new(
        Props {
            fullscreen: true,
            ..Props::default()
        },
        Options::default(),
    ));
    let mut bar = action_bar::State::new(&session.props());
    assert!(bar.controls().is_some());

    let props = session.props();
    let event = action_bar::update(&mut bar, action_bar::Message::Hide, &props, true);
    assert_eq!(event.propagation, Propagation::Stop);
    dispatch_all(session.clone(), event.requests)
        .await
        .expect("accepted");

    bar.sync_mount(&session.props());
    assert!(!action_bar::is_visible(&session.props()));
    assert!(bar.controls().is_none());
}

#[test]
fn language_comes_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"fr\"\n\n[controls]\nsensitivity = 0.5\n",
    )
    .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(format_label(loaded.initial_props().sensitivity), "0.5");
}

#[test]
fn cli_language_overrides_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"fr\"\n",
    )
    .expect("Failed to write config file");

    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let i18n = I18n::new(Some("en-US".into()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}
