// SPDX-License-Identifier: MPL-2.0
//! Port definitions for the player-state owner.
//!
//! The overlay never holds player state itself. It reads a [`Props`] snapshot
//! and asks the owner for changes through [`Request`]s. Adapters implement
//! [`PlayerSession`]; the binary ships [`LocalSession`], an in-memory owner.
//!
//! # Design Notes
//!
//! - Reads are synchronous snapshots, writes are asynchronous
//! - Methods return boxed futures so callers can wrap them in Iced `Task`s
//! - Mouse sync goes through an optional [`CommandInterface`]; a session
//!   without one turns the request into a no-op

pub mod local;

pub use local::{LocalCommandInterface, LocalSession};

use crate::error::SessionError;
use futures_util::future::{join_all, BoxFuture};
use std::sync::Arc;

/// A change the overlay asks the owner to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request {
    SetAutolock(bool),
    SetMobileControls(bool),
    SetMirroredControls(bool),
    SetSensitivity(f64),
    SetScaleControls(f64),
    SetPause(bool),
    SetMute(bool),
    ToggleKeyboard,
    ToggleFullscreen,
    OpenSideBar,
    CloseSideBar,
    SetActionBar(bool),
    /// One-shot pointer resynchronization on the command interface.
    SendMouseSync,
}

/// Read-only snapshot of everything the overlay renders from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Props {
    pub pause: bool,
    pub mute: bool,
    pub keyboard: bool,
    pub fullscreen: bool,
    pub mobile_controls: bool,
    pub mirrored_controls: bool,
    pub autolock: bool,
    pub side_bar: bool,
    pub action_bar: bool,
    pub portrait: bool,
    /// Current mouse sensitivity as stored by the player.
    pub sensitivity: f64,
    /// Current virtual-control scale as stored by the player.
    pub scale_controls: f64,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            pause: false,
            mute: false,
            keyboard: false,
            fullscreen: false,
            mobile_controls: false,
            mirrored_controls: false,
            autolock: false,
            side_bar: false,
            action_bar: true,
            portrait: false,
            sensitivity: 1.0,
            scale_controls: 1.0,
        }
    }
}

/// Capabilities of the hosting environment, queried on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// The host cannot switch to fullscreen.
    pub no_fullscreen: bool,
}

/// Low-level command channel to the running program.
pub trait CommandInterface: Send + Sync {
    /// Realigns the guest pointer with the host pointer.
    fn send_mouse_sync(&self);
}

/// Port for the player-state owner.
///
/// # Thread Safety
///
/// Sessions are shared between the UI thread and the tasks executing
/// requests, so implementations must be `Send + Sync`.
pub trait PlayerSession: Send + Sync {
    /// Current state snapshot.
    fn props(&self) -> Props;

    /// Host capabilities. Cheap; may change at runtime.
    fn options(&self) -> Options;

    /// Applies one request.
    ///
    /// [`Request::SendMouseSync`] is routed through [`dispatch`] and never
    /// reaches this method.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the owner refuses or is unreachable.
    fn apply(&self, request: Request) -> BoxFuture<'static, Result<(), SessionError>>;

    /// Command interface of the running program, if one is attached.
    fn command_interface(&self) -> Option<Arc<dyn CommandInterface>> {
        None
    }

    /// Notifies the owner of the new viewport size.
    fn viewport_changed(&self, _width: f32, _height: f32) {}
}

/// Sends one request to the owner.
///
/// Mouse sync is handed to the command interface when one is attached and is
/// silently skipped otherwise.
///
/// # Errors
///
/// Propagates the owner's [`SessionError`].
pub async fn dispatch(session: &dyn PlayerSession, request: Request) -> Result<(), SessionError> {
    log::debug!("dispatching {request:?}");
    match request {
        Request::SendMouseSync => {
            match session.command_interface() {
                Some(ci) => ci.send_mouse_sync(),
                None => log::debug!("mouse sync skipped: no command interface"),
            }
            Ok(())
        }
        other => session.apply(other).await,
    }
}

/// Sends requests one after another, each after the previous one resolved.
///
/// Stops at the first failure so a later request never overtakes an earlier
/// one that did not land.
///
/// # Errors
///
/// Returns the first [`SessionError`] encountered.
pub async fn dispatch_all(
    session: Arc<dyn PlayerSession>,
    requests: Vec<Request>,
) -> Result<(), SessionError> {
    for request in requests {
        dispatch(session.as_ref(), request).await?;
    }
    Ok(())
}

/// How the requests of one interaction relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sequencing {
    /// Each request waits for the previous one; the first failure ends the batch.
    #[default]
    Chained,
    /// Requests are fired together and never wait on each other.
    Independent,
}

/// Sends requests all at once. A failing request does not hold back the
/// others.
///
/// # Errors
///
/// Returns the first [`SessionError`] in request order, after every request
/// settled.
pub async fn dispatch_each(
    session: Arc<dyn PlayerSession>,
    requests: Vec<Request>,
) -> Result<(), SessionError> {
    let pending = requests.into_iter().map(|request| {
        let session = session.clone();
        async move { dispatch(session.as_ref(), request).await }
    });
    join_all(pending).await.into_iter().collect()
}

/// Sends `requests` the way `sequencing` asks.
///
/// # Errors
///
/// See [`dispatch_all`] and [`dispatch_each`].
pub async fn dispatch_batch(
    session: Arc<dyn PlayerSession>,
    requests: Vec<Request>,
    sequencing: Sequencing,
) -> Result<(), SessionError> {
    match sequencing {
        Sequencing::Chained => dispatch_all(session, requests).await,
        Sequencing::Independent => dispatch_each(session, requests).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Request>>,
        reject: Option<Request>,
    }

    impl PlayerSession for Recorder {
        fn props(&self) -> Props {
            Props::default()
        }

        fn options(&self) -> Options {
            Options::default()
        }

        fn apply(&self, request: Request) -> BoxFuture<'static, Result<(), SessionError>> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(request);
            }
            let rejected = self.reject == Some(request);
            Box::pin(async move {
                if rejected {
                    Err(SessionError::Rejected("test".into()))
                } else {
                    Ok(())
                }
            })
        }
    }

    struct Counter(AtomicU32);

    impl CommandInterface for Counter {
        fn send_mouse_sync(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct WithInterface(Arc<Counter>);

    impl PlayerSession for WithInterface {
        fn props(&self) -> Props {
            Props::default()
        }

        fn options(&self) -> Options {
            Options::default()
        }

        fn apply(&self, _request: Request) -> BoxFuture<'static, Result<(), SessionError>> {
            Box::pin(async { Err(SessionError::Unavailable) })
        }

        fn command_interface(&self) -> Option<Arc<dyn CommandInterface>> {
            Some(self.0.clone())
        }
    }

    #[tokio::test]
    async fn dispatch_all_keeps_request_order() {
        let recorder = Arc::new(Recorder::default());
        let requests = vec![
            Request::SetMobileControls(true),
            Request::SetMirroredControls(false),
        ];
        dispatch_all(recorder.clone(), requests.clone())
            .await
            .expect("both requests accepted");
        assert_eq!(*recorder.seen.lock().unwrap(), requests);
    }

    #[tokio::test]
    async fn dispatch_all_stops_at_first_failure() {
        let recorder = Arc::new(Recorder {
            reject: Some(Request::SetMirroredControls(false)),
            ..Recorder::default()
        });
        let result = dispatch_all(
            recorder.clone(),
            vec![
                Request::SetMirroredControls(false),
                Request::SetMobileControls(false),
            ],
        )
        .await;
        assert!(matches!(result, Err(SessionError::Rejected(_))));
        assert_eq!(
            *recorder.seen.lock().unwrap(),
            vec![Request::SetMirroredControls(false)]
        );
    }

    #[tokio::test]
    async fn dispatch_each_keeps_going_past_a_failure() {
        let recorder = Arc::new(Recorder {
            reject: Some(Request::SetPause(true)),
            ..Recorder::default()
        });
        let result = dispatch_each(
            recorder.clone(),
            vec![Request::SetPause(true), Request::CloseSideBar],
        )
        .await;
        assert!(matches!(result, Err(SessionError::Rejected(_))));
        assert!(recorder.seen.lock().unwrap().contains(&Request::CloseSideBar));
    }

    #[tokio::test]
    async fn dispatch_batch_follows_sequencing() {
        for (sequencing, expected) in [(Sequencing::Chained, 1), (Sequencing::Independent, 2)] {
            let recorder = Arc::new(Recorder {
                reject: Some(Request::ToggleKeyboard),
                ..Recorder::default()
            });
            let result = dispatch_batch(
                recorder.clone(),
                vec![Request::ToggleKeyboard, Request::CloseSideBar],
                sequencing,
            )
            .await;
            assert!(result.is_err());
            assert_eq!(recorder.seen.lock().unwrap().len(), expected);
        }
    }

    #[tokio::test]
    async fn mouse_sync_without_interface_is_a_no_op() {
        let recorder = Recorder::default();
        dispatch(&recorder, Request::SendMouseSync)
            .await
            .expect("no-op succeeds");
        assert!(recorder.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn mouse_sync_uses_command_interface() {
        let counter = Arc::new(Counter(AtomicU32::new(0)));
        let session = WithInterface(counter.clone());
        dispatch(&session, Request::SendMouseSync)
            .await
            .expect("sync never fails");
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }
}
