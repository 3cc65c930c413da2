// SPDX-License-Identifier: MPL-2.0
//! Mouse lock popover.
//!
//! Outside the portal the menu glyph is a plain autolock toggle. Inside the
//! portal it opens a strip with the two lock modes, the sensitivity label
//! (automatic lock only) and the sync button.

use super::{cell, glyph_button, separator, value_button, Event};
use crate::domain::controls::{format_label, is_neutral, LockMode, SENSITIVITY};
use crate::i18n::fluent::I18n;
use crate::session::{Props, Request};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons::{self, Tint};
use crate::ui::styles;
use crate::ui::styles::tooltip::Position;
use iced::widget::{container, Row};
use iced::{alignment::Vertical, Element, Length};

/// Popover-local state. Lives as long as the hosting bar is mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub open: bool,
    /// Set by the first sync; keeps the sync button around after the
    /// popover closes.
    pub sync_shown: bool,
    /// Optimistic copy of the owner's sensitivity.
    pub sensitivity: f64,
}

impl State {
    #[must_use]
    pub fn new(props: &Props) -> Self {
        Self {
            open: false,
            sync_shown: false,
            sensitivity: props.sensitivity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    MenuClicked,
    SelectLock(LockMode),
    CycleSensitivity,
    Sync,
}

pub fn update(state: &mut State, message: Message, props: &Props, portal: bool) -> Event {
    match message {
        Message::MenuClicked if !portal => {
            state.open = false;
            Event::stop(vec![Request::SetAutolock(!props.autolock)])
        }
        Message::MenuClicked => {
            state.open = !state.open;
            Event::bubble(Vec::new())
        }
        Message::SelectLock(mode) => {
            state.open = false;
            Event::stop(vec![Request::SetAutolock(mode.autolock())])
        }
        Message::CycleSensitivity => {
            state.sensitivity = SENSITIVITY.cycle(state.sensitivity);
            Event::stop(vec![Request::SetSensitivity(state.sensitivity)])
        }
        Message::Sync => {
            state.open = false;
            state.sync_shown = true;
            Event::stop(vec![Request::SendMouseSync])
        }
    }
}

/// Whether the sync button is rendered.
#[must_use]
pub fn sync_visible(state: &State, portal: bool, autolock: bool) -> bool {
    portal && !autolock && (state.open || state.sync_shown)
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub autolock: bool,
    pub portal: bool,
    pub tooltip_position: Position,
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &State) -> Element<'a, Message> {
    let menu_icon = if ctx.autolock {
        icons::cursor_click()
    } else {
        icons::cursor()
    };
    let menu = cell(glyph_button(
        menu_icon,
        Tint::Active,
        ctx.i18n.tr("mouse-menu-tooltip"),
        ctx.tooltip_position,
        Message::MenuClicked,
    ));

    let mut strip = Row::new().spacing(spacing::SM).align_y(Vertical::Center);
    let mut has_entries = false;

    if ctx.portal && state.open {
        let current = LockMode::from_autolock(ctx.autolock);
        strip = strip
            .push(glyph_button(
                icons::cursor(),
                Tint::active_if(current == LockMode::ClickToLock),
                ctx.i18n.tr("mouse-click-to-lock-tooltip"),
                Position::Bottom,
                Message::SelectLock(LockMode::ClickToLock),
            ))
            .push(glyph_button(
                icons::cursor_click(),
                Tint::active_if(current == LockMode::Auto),
                ctx.i18n.tr("mouse-autolock-tooltip"),
                Position::Bottom,
                Message::SelectLock(LockMode::Auto),
            ));
        if ctx.autolock {
            strip = strip.push(separator()).push(value_button(
                format_label(state.sensitivity),
                is_neutral(state.sensitivity),
                ctx.i18n.tr("mouse-sensitivity-tooltip"),
                Message::CycleSensitivity,
            ));
        }
        has_entries = true;
    }

    if sync_visible(state, ctx.portal, ctx.autolock) {
        if has_entries {
            strip = strip.push(separator());
        }
        strip = strip.push(glyph_button(
            icons::refresh(),
            Tint::Normal,
            ctx.i18n.tr("mouse-sync-tooltip"),
            Position::Bottom,
            Message::Sync,
        ));
        has_entries = true;
    }

    let mut content = Row::new().align_y(Vertical::Center).push(menu);
    if has_entries {
        content = content.push(
            container(strip)
                .height(Length::Fixed(sizing::POPOVER_HEIGHT))
                .padding([0.0, spacing::SM])
                .align_y(Vertical::Center)
                .style(styles::container::popover),
        );
    }
    content.into()
}
