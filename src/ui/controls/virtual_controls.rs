// SPDX-License-Identifier: MPL-2.0
//! Virtual controls popover: hidden / mobile / mirrored, plus the scale label.

use super::{cell, glyph_button, separator, value_button, Event};
use crate::domain::controls::{format_label, is_neutral, ControlMode, SCALE};
use crate::i18n::fluent::I18n;
use crate::session::{Props, Request};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons::{self, Tint};
use crate::ui::styles;
use crate::ui::styles::tooltip::Position;
use iced::widget::{container, svg::Svg, Row};
use iced::{alignment::Vertical, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub open: bool,
    /// Optimistic copy of the owner's control scale.
    pub scale: f64,
}

impl State {
    #[must_use]
    pub fn new(props: &Props) -> Self {
        Self {
            open: false,
            scale: props.scale_controls,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    MenuClicked,
    Select(ControlMode),
    CycleScale,
}

/// Ordered requests that switch the owner to `mode`.
///
/// The owner stores two flags; selecting Mirrored leaves `mobile_controls`
/// untouched since Mirrored wins when both are set.
#[must_use]
pub fn selection_requests(mode: ControlMode) -> Vec<Request> {
    match mode {
        ControlMode::Hidden => vec![
            Request::SetMirroredControls(false),
            Request::SetMobileControls(false),
        ],
        ControlMode::Mobile => vec![
            Request::SetMobileControls(true),
            Request::SetMirroredControls(false),
        ],
        ControlMode::Mirrored => vec![Request::SetMirroredControls(true)],
    }
}

pub fn update(state: &mut State, message: Message, props: &Props, portal: bool) -> Event {
    match message {
        Message::MenuClicked if !portal => {
            Event::bubble(vec![Request::SetMobileControls(!props.mobile_controls)])
        }
        Message::MenuClicked => {
            state.open = !state.open;
            Event::bubble(Vec::new())
        }
        Message::Select(mode) => {
            state.open = false;
            Event::stop(selection_requests(mode))
        }
        Message::CycleScale => {
            state.scale = SCALE.cycle(state.scale);
            Event::stop(vec![Request::SetScaleControls(state.scale)])
        }
    }
}

fn mode_icon<'a>(mode: ControlMode) -> Svg<'a> {
    match mode {
        ControlMode::Hidden => icons::eye_off(),
        ControlMode::Mobile => icons::device_mobile(),
        ControlMode::Mirrored => icons::switch_horizontal(),
    }
}

fn mode_tooltip_key(mode: ControlMode) -> &'static str {
    match mode {
        ControlMode::Hidden => "virtual-hidden-tooltip",
        ControlMode::Mobile => "virtual-mobile-tooltip",
        ControlMode::Mirrored => "virtual-mirrored-tooltip",
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub mode: ControlMode,
    pub portal: bool,
    pub tooltip_position: Position,
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &State) -> Element<'a, Message> {
    let menu = cell(glyph_button(
        mode_icon(ctx.mode),
        Tint::Active,
        ctx.i18n.tr("virtual-menu-tooltip"),
        ctx.tooltip_position,
        Message::MenuClicked,
    ));

    let mut content = Row::new().align_y(Vertical::Center).push(menu);

    if ctx.portal && state.open {
        let strip = ControlMode::ALL
            .iter()
            .fold(
                Row::new().spacing(spacing::SM).align_y(Vertical::Center),
                |row, &mode| {
                    row.push(glyph_button(
                        mode_icon(mode),
                        Tint::active_if(mode == ctx.mode),
                        ctx.i18n.tr(mode_tooltip_key(mode)),
                        Position::Bottom,
                        Message::Select(mode),
                    ))
                },
            )
            .push(separator())
            .push(value_button(
                format_label(state.scale),
                is_neutral(state.scale),
                ctx.i18n.tr("virtual-scale-tooltip"),
                Message::CycleScale,
            ));

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
