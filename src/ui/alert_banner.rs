// SPDX-License-Identifier: MPL-2.0
//! Inline alert banner.
//!
//! Banners use the same [`Lifecycle`] as toasts. A banner without an
//! auto-dismiss delay is simply a persistent notification.

use crate::notification::{Lifecycle, Manager, NotificationMessage as Message, Phase};
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Banner density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BannerSize {
    pub const ALL: [BannerSize; 3] = [BannerSize::Sm, BannerSize::Md, BannerSize::Lg];

    fn padding(self) -> f32 {
        match self {
            BannerSize::Sm => spacing::XS,
            BannerSize::Md => spacing::SM,
            BannerSize::Lg => spacing::MD,
        }
    }

    fn text_size(self) -> f32 {
        match self {
            BannerSize::Sm => typography::BODY_SM,
            BannerSize::Md => typography::BODY,
            BannerSize::Lg => typography::BODY_LG,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BannerSize::Sm => "sm",
            BannerSize::Md => "md",
            BannerSize::Lg => "lg",
        }
    }
}

pub struct AlertBanner;

impl AlertBanner {
    pub fn view(lifecycle: &Lifecycle, size: BannerSize) -> Element<'_, Message> {
        let notification = lifecycle.notification();
        let severity = notification.severity();
        let alpha = if lifecycle.phase() == Phase::Active {
            opacity::OPAQUE
        } else {
            opacity::CLOSING
        };

        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(severity.glyph()).size(size.text_size()))
            .push(
                Container::new(Text::new(notification.message()).size(size.text_size()))
                    .width(Length::Fill),
            );

        if notification.is_dismissible() && lifecycle.phase() == Phase::Active {
            row = row.push(
                button(Text::new("×").size(size.text_size()))
                    .on_press(Message::Dismiss(notification.id()))
                    .padding(spacing::XXS)
                    .style(styles::dismiss),
            );
        }

        Container::new(row)
            .width(Length::Fill)
            .padding(size.padding())
            .style(move |_theme: &Theme| styles::banner(severity, alpha))
            .into()
    }

    /// Renders every banner of a manager, newest on top.
    pub fn view_all(manager: &Manager, size: BannerSize) -> Element<'_, Message> {
        Column::with_children(
            manager
                .visible()
                .map(|lifecycle| Self::view(lifecycle, size)),
        )
        .spacing(spacing::XS)
        .into()
    }
}
