// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application root.

use super::{App, Message};
use crate::ui::action_bar;
use crate::ui::controls::{self, glyph_button, Orientation};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Tint};
use crate::ui::styles;
use crate::ui::styles::tooltip::Position;
use iced::widget::{button, container, mouse_area, stack, text, Column, Row, Space};
use iced::{alignment::Horizontal, Element, Length};

impl App {
    pub(super) fn render(&self) -> Element<'_, Message> {
        let no_fullscreen = self.session.options().no_fullscreen;

        let mut main = Row::new().height(Length::Fill).push(self.surface());
        if self.props.side_bar {
            main = main.push(self.side_bar());
        }

        let mut body = Column::new().push(main);
        if let Some(state) = &self.portrait_controls {
            let row = controls::view(
                controls::ViewContext {
                    i18n: &self.i18n,
                    props: self.props,
                    portal: self.portal,
                    no_fullscreen,
                    orientation: Orientation::Row,
                },
                state,
            )
            .map(Message::PortraitControls);
            body = body.push(
                container(row)
                    .width(Length::Fill)
                    .padding([spacing::XS, 0.0])
                    .style(styles::container::action_bar),
            );
        }

        let bar = action_bar::view(
            action_bar::ViewContext {
                i18n: &self.i18n,
                props: self.props,
                portal: self.portal,
                no_fullscreen,
            },
            &self.action_bar,
        );

        match bar {
            Some(bar) => stack![
                Row::new()
                    .push(Space::new().width(Length::Fixed(sizing::ACTION_BAR_WIDTH)))
                    .push(body),
                bar.map(Message::ActionBar),
            ]
            .into(),
            None if self.props.fullscreen => {
                let show = glyph_button(
                    icons::chevron_double_right(),
                    Tint::Normal,
                    self.i18n.tr("action-bar-show-tooltip"),
                    Position::Right,
                    Message::ShowActionBar,
                );
                stack![
                    body,
                    container(container(show).style(styles::container::popover))
                        .padding(spacing::SM),
                ]
                .into()
            }
            None => body.into(),
        }
    }

    /// Stand-in for the player canvas: a status line on a dark surface.
    fn surface(&self) -> Element<'_, Message> {
        let status_key = if self.props.pause {
            "surface-paused"
        } else {
            "surface-running"
        };

        let mut status = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(self.i18n.tr(status_key)).size(typography::TITLE_MD));
        if self.props.mute {
            status = status.push(text(self.i18n.tr("surface-muted")).size(typography::BODY));
        }
        if self.props.keyboard {
            status = status.push(text(self.i18n.tr("surface-keyboard")).size(typography::BODY));
        }
        if let Some(key) = &self.startup_warning {
            status = status.push(text(self.i18n.tr(key)).size(typography::BODY));
        }

        mouse_area(
            container(status)
                .center(Length::Fill)
                .style(styles::container::surface),
        )
        .on_press(Message::SurfaceClicked)
        .into()
    }

    fn side_bar(&self) -> Element<'_, Message> {
        let content = Column::new()
            .spacing(spacing::MD)
            .push(text(self.i18n.tr("side-bar-title")).size(typography::TITLE_MD))
            .push(button(text(self.i18n.tr("side-bar-close"))).on_press(Message::CloseSideBar));

        container(content)
            .width(Length::Fixed(sizing::SIDE_BAR_WIDTH))
            .height(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::panel)
            .into()
    }
}
