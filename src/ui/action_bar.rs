// SPDX-License-Identifier: MPL-2.0
//! Vertical action bar docked to the left edge of the player.
//!
//! The bar hides in portrait layout and in fullscreen once the user hid it.
//! Its header is the side bar toggle, or the hide button in fullscreen.
//! The controls bar below it is mounted only while the bar is visible.

use crate::i18n::fluent::I18n;
use crate::session::{Props, Request};
use crate::ui::controls::{self, cell, glyph_button, Event, Orientation};
use crate::ui::design_tokens::{border, sizing, spacing};
use crate::ui::icons::{self, Tint};
use crate::ui::styles;
use crate::ui::styles::tooltip::Position;
use iced::widget::{container, rule, stack, Column, Space};
use iced::{alignment::Horizontal, Element, Length};

/// Whether the bar renders at all for this snapshot.
#[must_use]
pub fn is_visible(props: &Props) -> bool {
    !props.portrait && !(props.fullscreen && !props.action_bar)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    controls: Option<controls::State>,
}

impl State {
    #[must_use]
    pub fn new(props: &Props) -> Self {
        let mut state = Self::default();
        state.sync_mount(props);
        state
    }

    /// Mounts or unmounts the controls to follow visibility.
    pub fn sync_mount(&mut self, props: &Props) {
        controls::sync_mount(&mut self.controls, is_visible(props), props);
    }

    #[must_use]
    pub fn controls(&self) -> Option<&controls::State> {
        self.controls.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Controls(controls::Message),
    ToggleSideBar,
    Hide,
}

pub fn update(state: &mut State, message: Message, props: &Props, portal: bool) -> Event {
    match message {
        Message::Controls(msg) => match state.controls.as_mut() {
            Some(controls) => controls::update(controls, msg, props, portal),
            None => Event::none(),
        },
        Message::ToggleSideBar => Event::stop(vec![if props.side_bar {
            Request::CloseSideBar
        } else {
            Request::OpenSideBar
        }]),
        Message::Hide => Event::stop(vec![Request::SetActionBar(false)]),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub props: Props,
    pub portal: bool,
    pub no_fullscreen: bool,
}

/// Render the bar, or nothing when hidden.
pub fn view<'a>(ctx: ViewContext<'a>, state: &State) -> Option<Element<'a, Message>> {
    if !is_visible(&ctx.props) {
        return None;
    }
    let controls_state = state.controls.as_ref()?;

    let header = if ctx.props.fullscreen {
        glyph_button(
            icons::chevron_double_left(),
            Tint::Normal,
            ctx.i18n.tr("action-bar-hide-tooltip"),
            Position::Right,
            Message::Hide,
        )
    } else {
        glyph_button(
            icons::dots_horizontal(),
            if ctx.props.side_bar {
                Tint::Active
            } else {
                Tint::Muted
            },
            ctx.i18n.tr("action-bar-side-bar-tooltip"),
            Position::Right,
            Message::ToggleSideBar,
        )
    };

    let controls = controls::view(
        controls::ViewContext {
            i18n: ctx.i18n,
            props: ctx.props,
            portal: ctx.portal,
            no_fullscreen: ctx.no_fullscreen,
            orientation: Orientation::Column,
        },
        controls_state,
    )
    .map(Message::Controls);

    let content = Column::new()
        .align_x(Horizontal::Left)
        .push(container(cell(header)).padding([spacing::MD, 0.0]))
        .push(
            container(rule::horizontal(border::WIDTH_MD))
                .width(Length::Fixed(sizing::ACTION_BAR_WIDTH)),
        )
        .push(controls);

    // The strip keeps the bar width while popovers extend over the surface.
    let strip = container(Space::new())
        .width(Length::Fixed(sizing::ACTION_BAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::action_bar);

    Some(stack![strip, content].height(Length::Fill).into())
}
