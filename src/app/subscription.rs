// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window geometry matters to the overlay: the first size on open and
//! every resize feed the session's portrait detection.

use super::Message;
use iced::{event, window, Subscription};

/// Window open and resize events, tagged with the window id.
pub fn window_events() -> Subscription<Message> {
    event::listen_with(|event, _status, id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized { id, size })
        }
        _ => None,
    })
}
