// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.
//!
//! Component events become request batches; each batch runs as one task whose
//! completion re-reads the session snapshot. Chained batches stop at their
//! first failure, independent ones never wait on each other. The surface's
//! own requests always run apart from the component's. A failed request is
//! logged and otherwise ignored: local shadows are never rolled back.

use super::{App, Message};
use crate::error::Error;
use crate::session::{self, Props, Request, Sequencing};
use crate::ui::action_bar;
use crate::ui::controls::{self, Event, Propagation};
use iced::{window, Task};

/// Requests triggered by a click reaching the player surface.
///
/// The surface closes an open side bar, unless the batch already does.
pub(super) fn surface_requests(props: &Props, pending: &[Request]) -> Vec<Request> {
    if props.side_bar && !pending.contains(&Request::CloseSideBar) {
        vec![Request::CloseSideBar]
    } else {
        Vec::new()
    }
}

impl App {
    pub(super) fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ActionBar(msg) => {
                let event = action_bar::update(&mut self.action_bar, msg, &self.props, self.portal);
                self.handle_event(event)
            }
            Message::PortraitControls(msg) => {
                let event = match self.portrait_controls.as_mut() {
                    Some(state) => controls::update(state, msg, &self.props, self.portal),
                    None => Event::none(),
                };
                self.handle_event(event)
            }
            Message::SurfaceClicked => {
                self.run_requests(surface_requests(&self.props, &[]), Sequencing::Independent)
            }
            Message::ShowActionBar => {
                self.run_requests(vec![Request::SetActionBar(true)], Sequencing::Chained)
            }
            Message::CloseSideBar => {
                self.run_requests(vec![Request::CloseSideBar], Sequencing::Chained)
            }
            Message::SessionSettled(result) => {
                if let Err(err) = result {
                    log::warn!("player request failed: {err}");
                }
                self.refresh_props()
            }
            Message::WindowResized { id, size } => {
                self.window_id = Some(id);
                self.session.viewport_changed(size.width, size.height);
                self.refresh_props()
            }
        }
    }

    fn handle_event(&mut self, event: Event) -> Task<Message> {
        let surface = match event.propagation {
            Propagation::Bubble => surface_requests(&self.props, &event.requests),
            Propagation::Stop => Vec::new(),
        };
        Task::batch([
            self.run_requests(event.requests, event.sequencing),
            self.run_requests(surface, Sequencing::Independent),
        ])
    }

    /// Spawns one task that sends `requests` as `sequencing` asks.
    fn run_requests(&self, requests: Vec<Request>, sequencing: Sequencing) -> Task<Message> {
        if requests.is_empty() {
            return Task::none();
        }
        log::debug!("queueing {requests:?} ({sequencing:?})");
        Task::perform(
            session::dispatch_batch(self.session.clone(), requests, sequencing),
            |result| Message::SessionSettled(result.map_err(Error::from)),
        )
    }

    /// Re-reads the owner's snapshot and follows it with mounts and window mode.
    fn refresh_props(&mut self) -> Task<Message> {
        self.props = self.session.props();
        self.action_bar.sync_mount(&self.props);
        controls::sync_mount(
            &mut self.portrait_controls,
            self.props.portrait,
            &self.props,
        );
        self.apply_fullscreen()
    }

    fn apply_fullscreen(&mut self) -> Task<Message> {
        let desired = self.props.fullscreen;
        if self.fullscreen_applied == desired {
            return Task::none();
        }

        let Some(window_id) = self.window_id else {
            return Task::none();
        };

        self.fullscreen_applied = desired;
        let mode = if desired {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        log::info!("switching window to {mode:?}");
        window::set_mode(window_id, mode)
    }
}
