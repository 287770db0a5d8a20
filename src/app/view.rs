// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery.
//!
//! The page is a single column of sections, one per primitive, with the
//! toast stack layered on top.

use super::Message;
use crate::config::Position;
use crate::notification::{Manager, Severity};
use crate::ui::alert_banner::{AlertBanner, BannerSize};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::file_upload;
use crate::ui::styles;
use crate::ui::toast::Toast;
use iced::widget::{button, scrollable, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub toasts: &'a Manager,
    pub banners: &'a Manager,
    pub upload: &'a file_upload::State,
    pub position: Position,
    pub banner_size: BannerSize,
    pub persistent: bool,
    pub dismissible: bool,
    pub status: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let options = Row::new()
        .spacing(spacing::XS)
        .push(toggle("Persistent", ctx.persistent, Message::TogglePersistent))
        .push(toggle("Dismissible", ctx.dismissible, Message::ToggleDismissible))
        .push(
            button(Text::new(format!("Position: {}", ctx.position)))
                .on_press(Message::CyclePosition),
        )
        .push(
            button(Text::new(format!("Banner size: {}", ctx.banner_size.label())))
                .on_press(Message::CycleBannerSize),
        )
        .push(button(Text::new("Clear all")).on_press(Message::ClearAll));

    let mut page = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new("Design Kit").size(typography::TITLE_LG))
        .push(options)
        .push(section_title("Toast"))
        .push(severity_buttons(Message::ShowToast))
        .push(section_title("Alert banner"))
        .push(severity_buttons(Message::ShowBanner))
        .push(AlertBanner::view_all(ctx.banners, ctx.banner_size).map(Message::Banner))
        .push(section_title("File upload"))
        .push(ctx.upload.view().map(Message::Upload));

    if let Some(status) = ctx.status {
        page = page.push(Text::new(status).size(typography::CAPTION));
    }

    let base = Container::new(scrollable(page))
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(ctx.toasts, ctx.position).map(Message::Toast))
        .into()
}

fn section_title(title: &str) -> Text<'_> {
    Text::new(title).size(typography::TITLE_MD)
}

fn toggle(label: &str, on: bool, message: Message) -> Element<'_, Message> {
    let state = if on { "on" } else { "off" };
    button(Text::new(format!("{label}: {state}")))
        .on_press(message)
        .into()
}

fn severity_buttons<'a>(to_message: fn(Severity) -> Message) -> Element<'a, Message> {
    Severity::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, severity| {
            row.push(
                button(Text::new(severity.label()))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::accent(severity))
                    .on_press(to_message(severity)),
            )
        })
        .into()
}
