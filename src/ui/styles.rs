// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles shared by the primitives.

use crate::notification::Severity;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Card behind a toast. `alpha` fades the whole card while it closes.
pub fn toast_card(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(with_alpha(bg_color, alpha))),
        border: Border {
            color: with_alpha(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Full-width banner tinted by severity.
pub fn banner(severity: Severity, alpha: f32) -> container::Style {
    let tint = match severity {
        Severity::Info => palette::INFO_100,
        Severity::Success => palette::SUCCESS_100,
        Severity::Warning => palette::WARNING_100,
        Severity::Error => palette::ERROR_100,
    };

    container::Style {
        background: Some(Background::Color(with_alpha(tint, alpha))),
        border: Border {
            color: with_alpha(severity.color(), alpha),
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(with_alpha(palette::GRAY_900, alpha)),
        ..Default::default()
    }
}

/// Segment of the countdown bar; `filled` selects accent or track color.
pub fn progress_segment(accent: Color, filled: bool) -> container::Style {
    let color = if filled {
        accent
    } else {
        with_alpha(palette::GRAY_400, opacity::OVERLAY_SUBTLE)
    };

    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Borderless close button.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |alpha: f32| button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: with_alpha(base.text, opacity::OVERLAY_MEDIUM),
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Filled button in the severity accent, used by the gallery triggers.
pub fn accent(severity: Severity) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => with_alpha(severity.color(), 0.85),
            button::Status::Disabled => with_alpha(severity.color(), opacity::OVERLAY_MEDIUM),
            button::Status::Active | button::Status::Pressed => severity.color(),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_card_uses_accent_color() {
        let style = toast_card(&Theme::Dark, palette::SUCCESS_500, opacity::OPAQUE);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn closing_toast_is_faded() {
        let style = toast_card(&Theme::Light, palette::ERROR_500, opacity::CLOSING);
        assert!(style.border.color.a < palette::ERROR_500.a);
    }

    #[test]
    fn banner_border_follows_severity() {
        for severity in Severity::ALL {
            let style = banner(severity, opacity::OPAQUE);
            assert_eq!(style.border.color, severity.color());
        }
    }

    #[test]
    fn disabled_dismiss_button_is_dimmed() {
        let style = dismiss(&Theme::Dark, button::Status::Disabled);
        assert!(style.text_color.a < 1.0);
    }
}
