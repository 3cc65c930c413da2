// SPDX-License-Identifier: MPL-2.0
//! Controls bar: mouse and virtual-control popovers plus the pause, mute,
//! keyboard and fullscreen toggles.
//!
//! Components never touch player state. Every interaction returns an
//! [`Event`] carrying the [`Request`]s for the owner, how they are sequenced,
//! and whether the click also reaches the player surface underneath.

pub mod mouse;
pub mod virtual_controls;

use crate::domain::controls::ControlMode;
use crate::i18n::fluent::I18n;
use crate::session::{Props, Request, Sequencing};
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::icons::{self, Tint};
use crate::ui::styles;
use crate::ui::styles::tooltip::Position;
use iced::widget::{button, container, rule, svg::Svg, text, Column, Row};
use iced::{alignment::Horizontal, alignment::Vertical, Element, Length};

/// Whether a click continues to the ancestor surface handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Bubble,
    Stop,
}

/// Outcome of a component update.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub requests: Vec<Request>,
    /// Chained by default: each request after the previous one resolved.
    pub sequencing: Sequencing,
    pub propagation: Propagation,
}

impl Event {
    #[must_use]
    pub fn bubble(requests: Vec<Request>) -> Self {
        Self {
            requests,
            sequencing: Sequencing::Chained,
            propagation: Propagation::Bubble,
        }
    }

    #[must_use]
    pub fn stop(requests: Vec<Request>) -> Self {
        Self {
            requests,
            sequencing: Sequencing::Chained,
            propagation: Propagation::Stop,
        }
    }

    /// Fires the requests without waiting on one another.
    #[must_use]
    pub fn independent(mut self) -> Self {
        self.sequencing = Sequencing::Independent;
        self
    }

    /// Nothing to do.
    #[must_use]
    pub fn none() -> Self {
        Self::stop(Vec::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Row,
    #[default]
    Column,
}

/// Popover state of a mounted controls bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub mouse: mouse::State,
    pub virtual_controls: virtual_controls::State,
}

impl State {
    /// Fresh popovers, numeric shadows seeded from the owner.
    #[must_use]
    pub fn new(props: &Props) -> Self {
        Self {
            mouse: mouse::State::new(props),
            virtual_controls: virtual_controls::State::new(props),
        }
    }
}

/// Mounts a fresh [`State`] when the host becomes visible and drops it when
/// the host hides. A mounted state is left untouched.
pub fn sync_mount(slot: &mut Option<State>, visible: bool, props: &Props) {
    match (visible, slot.is_some()) {
        (true, false) => *slot = Some(State::new(props)),
        (false, true) => *slot = None,
        _ => {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Mouse(mouse::Message),
    Virtual(virtual_controls::Message),
    TogglePause,
    ToggleMute,
    ToggleKeyboard,
    ToggleFullscreen,
}

/// Process a controls message and return the resulting requests.
pub fn update(state: &mut State, message: Message, props: &Props, portal: bool) -> Event {
    match message {
        Message::Mouse(msg) => mouse::update(&mut state.mouse, msg, props, portal),
        Message::Virtual(msg) => {
            virtual_controls::update(&mut state.virtual_controls, msg, props, portal)
        }
        Message::TogglePause => toggle(Request::SetPause(!props.pause)),
        Message::ToggleMute => toggle(Request::SetMute(!props.mute)),
        Message::ToggleKeyboard => toggle(Request::ToggleKeyboard),
        Message::ToggleFullscreen => toggle(Request::ToggleFullscreen),
    }
}

/// Toggles fire their own request and close the side bar without waiting
/// for it, then let the click through.
fn toggle(request: Request) -> Event {
    Event::bubble(vec![request, Request::CloseSideBar]).independent()
}

const TOGGLES: [Message; 4] = [
    Message::TogglePause,
    Message::ToggleMute,
    Message::ToggleKeyboard,
    Message::ToggleFullscreen,
];

/// Toggle buttons shown for the host's capabilities, in display order.
#[must_use]
pub fn toggles(no_fullscreen: bool) -> &'static [Message] {
    if no_fullscreen {
        &TOGGLES[..3]
    } else {
        &TOGGLES
    }
}

/// Contextual data needed to render the controls bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub props: Props,
    pub portal: bool,
    /// Host cannot go fullscreen; hides the fullscreen toggle.
    pub no_fullscreen: bool,
    pub orientation: Orientation,
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &State) -> Element<'a, Message> {
    let props = ctx.props;
    let tooltip_position = match ctx.orientation {
        Orientation::Column => Position::Right,
        Orientation::Row => Position::Top,
    };

    let mouse = mouse::view(
        mouse::ViewContext {
            i18n: ctx.i18n,
            autolock: props.autolock,
            portal: ctx.portal,
            tooltip_position,
        },
        &state.mouse,
    )
    .map(Message::Mouse);

    let virtual_controls = virtual_controls::view(
        virtual_controls::ViewContext {
            i18n: ctx.i18n,
            mode: ControlMode::from_flags(props.mobile_controls, props.mirrored_controls),
            portal: ctx.portal,
            tooltip_position,
        },
        &state.virtual_controls,
    )
    .map(Message::Virtual);

    let mut items: Vec<Element<'a, Message>> = vec![mouse, virtual_controls];
    items.extend(
        toggles(ctx.no_fullscreen)
            .iter()
            .map(|&message| cell(toggle_button(ctx.i18n, &props, message, tooltip_position))),
    );

    match ctx.orientation {
        Orientation::Column => Column::with_children(items)
            .spacing(spacing::MD)
            .padding([spacing::MD, 0.0])
            .align_x(Horizontal::Left)
            .into(),
        Orientation::Row => Row::with_children(items)
            .spacing(spacing::MD)
            .padding([0.0, spacing::MD])
            .align_y(Vertical::Center)
            .into(),
    }
}

fn toggle_button<'a>(
    i18n: &I18n,
    props: &Props,
    message: Message,
    position: Position,
) -> Element<'a, Message> {
    let (icon, tint, tip) = match message {
        Message::TogglePause if props.pause => {
            (icons::play(), Tint::Alert, "controls-resume-tooltip")
        }
        Message::TogglePause => (icons::pause(), Tint::Normal, "controls-pause-tooltip"),
        Message::ToggleMute if props.mute => {
            (icons::volume_off(), Tint::Active, "controls-unmute-tooltip")
        }
        Message::ToggleMute => (icons::volume_up(), Tint::Normal, "controls-mute-tooltip"),
        Message::ToggleKeyboard => (
            icons::pencil_alt(),
            Tint::active_if(props.keyboard),
            "controls-keyboard-tooltip",
        ),
        Message::ToggleFullscreen | Message::Mouse(_) | Message::Virtual(_) => (
            icons::arrows_expand(),
            Tint::active_if(props.fullscreen),
            "controls-fullscreen-tooltip",
        ),
    };
    glyph_button(icon, tint, i18n.tr(tip), position, message)
}

/// Icon button with a tooltip.
pub(crate) fn glyph_button<'a, M: Clone + 'a>(
    icon: Svg<'a>,
    tint: Tint,
    tip: String,
    position: Position,
    on_press: M,
) -> Element<'a, M> {
    styles::tooltip::styled(
        button(icons::tinted(icon, tint))
            .on_press(on_press)
            .padding(spacing::XS)
            .style(styles::button::icon),
        tip,
        position,
    )
    .into()
}

/// Clickable numeric label inside a popover.
pub(crate) fn value_button<'a, M: Clone + 'a>(
    label: String,
    neutral: bool,
    tip: String,
    on_press: M,
) -> Element<'a, M> {
    styles::tooltip::styled(
        button(text(label).size(typography::BODY))
            .on_press(on_press)
            .padding(spacing::XS)
            .style(styles::button::value_label(neutral)),
        tip,
        Position::Bottom,
    )
    .into()
}

/// Centers a glyph in a cell as wide as the action bar.
pub(crate) fn cell<'a, M: 'a>(content: Element<'a, M>) -> Element<'a, M> {
    container(content)
        .center_x(Length::Fixed(sizing::ACTION_BAR_WIDTH))
        .into()
}

/// Vertical divider between popover groups.
pub(crate) fn separator<'a, M: 'a>() -> Element<'a, M> {
    container(rule::vertical(border::WIDTH_MD))
        .height(Length::Fixed(sizing::ICON_MD))
        .into()
}
