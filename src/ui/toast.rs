// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored border, an optional close
//! button and a countdown bar that drains as the notification ages.

use crate::config::Position;
use crate::notification::{Lifecycle, Manager, NotificationMessage as Message, Phase};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Resolution of the countdown bar.
const PROGRESS_STEPS: u16 = 1000;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(lifecycle: &Lifecycle) -> Element<'_, Message> {
        let notification = lifecycle.notification();
        let severity = notification.severity();
        let accent = severity.color();
        let alpha = card_alpha(lifecycle.phase());

        let glyph = Text::new(severity.glyph())
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..accent
                }),
            });

        let message = Text::new(notification.message()).size(typography::BODY);

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if notification.is_dismissible() {
            let close = button(Text::new("✕").size(sizing::ICON_SM))
                .padding(spacing::XXS)
                .style(styles::dismiss);
            // A closing toast keeps its button but no longer reacts to it.
            let close = if lifecycle.phase() == Phase::Active {
                close.on_press(Message::Dismiss(notification.id()))
            } else {
                close
            };
            content = content.push(close);
        }

        let mut card = Column::new().spacing(spacing::XS).push(content);
        if notification.auto_dismisses() {
            card = card.push(progress_bar(lifecycle.remaining_fraction(), accent));
        }

        Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| styles::toast_card(theme, accent, alpha))
            .into()
    }

    /// Renders every visible toast stacked in the requested corner.
    pub fn view_overlay(manager: &Manager, position: Position) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager.visible().map(Self::view).collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (horizontal, vertical) = anchor(position);
        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }
}

fn card_alpha(phase: Phase) -> f32 {
    match phase {
        Phase::Active => opacity::OPAQUE,
        Phase::Closing | Phase::Closed => opacity::CLOSING,
    }
}

fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    match position {
        Position::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        Position::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
        Position::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
        Position::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
    }
}

/// Splits `fraction` into filled and empty portions of the bar.
fn progress_portions(fraction: f32) -> (u16, u16) {
    let filled = (fraction.clamp(0.0, 1.0) * f32::from(PROGRESS_STEPS)).round() as u16;
    (filled, PROGRESS_STEPS - filled)
}

fn progress_bar<'a>(fraction: f32, accent: Color) -> Element<'a, Message> {
    let (filled, empty) = progress_portions(fraction);
    let segment = |portion: u16, is_filled: bool| {
        Container::new(text(""))
            .width(Length::FillPortion(portion))
            .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
            .style(move |_theme: &Theme| styles::progress_segment(accent, is_filled))
    };

    let mut bar = Row::new().width(Length::Fill);
    if filled > 0 {
        bar = bar.push(segment(filled, true));
    }
    if empty > 0 {
        bar = bar.push(segment(empty, false));
    }
    container(bar).width(Length::Fill).into()
}
