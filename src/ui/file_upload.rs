// SPDX-License-Identifier: MPL-2.0
//! File upload field.
//!
//! The field opens a native dialog, runs the picked files through a
//! [`SizeGuard`] and either lists the accepted files or shows the rejection.
//! Opening the dialog is left to the parent so it can be run as an Iced task.

use crate::config::{UploadConfig, DEFAULT_UPLOAD_LABEL};
use crate::upload::{format_file_size, FileCandidate, Selection, SizeGuard};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{button, text, Column, Row, Text};
use iced::{Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    Browse,
    Picked(Vec<FileCandidate>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The parent should open the file dialog.
    OpenDialog {
        multiple: bool,
        accept: Option<Vec<String>>,
    },
    /// A batch passed the guard.
    Selected(Selection),
    /// A batch was rejected; the message is already shown in the field.
    Rejected(String),
}

#[derive(Debug, Clone)]
pub struct State {
    guard: SizeGuard,
    label: String,
    required: bool,
    disabled: bool,
    accept: Option<Vec<String>>,
    files: Vec<FileCandidate>,
    error: Option<String>,
    /// Shown when the guard has nothing to report.
    error_message: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&UploadConfig::default())
    }
}

impl State {
    #[must_use]
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            guard: SizeGuard::new(config.max_size_bytes, config.multiple),
            label: DEFAULT_UPLOAD_LABEL.to_string(),
            required: config.required,
            disabled: false,
            accept: config.accept.clone(),
            files: Vec::new(),
            error: None,
            error_message: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the message shown when the last selection passed the guard.
    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    #[must_use]
    pub fn files(&self) -> &[FileCandidate] {
        &self.files
    }

    /// Error from the size guard, if the last selection was rejected.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Message rendered under the field. The guard's error takes precedence.
    #[must_use]
    pub fn displayed_error(&self) -> Option<&str> {
        self.error.as_deref().or(self.error_message.as_deref())
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Browse if self.disabled => Event::None,
            Message::Browse => Event::OpenDialog {
                multiple: self.guard.is_multiple(),
                accept: self.accept.clone(),
            },
            Message::Picked(candidates) => {
                self.error = None;
                match self.guard.check(candidates) {
                    Ok(selection) => {
                        self.files = selection.files().to_vec();
                        Event::Selected(selection)
                    }
                    Err(err) => {
                        let message = err.to_string();
                        self.error = Some(message.clone());
                        Event::Rejected(message)
                    }
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut label = Row::new()
            .spacing(spacing::XXS)
            .push(Text::new(self.label.as_str()).size(typography::BODY));
        if self.required {
            label = label.push(Text::new("*").size(typography::BODY).style(error_text));
        }

        let browse = button(Text::new(format!("📁 {}", self.label)).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press_maybe((!self.disabled).then_some(Message::Browse));

        let mut column = Column::new()
            .spacing(spacing::XS)
            .width(Length::Fixed(sizing::UPLOAD_WIDTH))
            .push(label)
            .push(browse);

        for file in &self.files {
            column = column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        Text::new(file.name.as_str())
                            .size(typography::BODY_SM)
                            .width(Length::Fill),
                    )
                    .push(text(format_file_size(file.size)).size(typography::CAPTION)),
            );
        }

        if let Some(error) = self.displayed_error() {
            column = column.push(
                Text::new(error)
                    .size(typography::CAPTION)
                    .style(error_text),
            );
        }

        column.into()
    }
}

fn error_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}

/// Turns accept entries into dialog extensions.
///
/// Leading dots are stripped. MIME patterns such as `image/*` have no
/// portable native equivalent and are skipped.
fn dialog_extensions(accept: &[String]) -> Vec<String> {
    accept
        .iter()
        .map(|entry| entry.trim().trim_start_matches('.'))
        .filter(|entry| {
            let usable = !entry.is_empty() && !entry.contains('/');
            if !usable {
                log::debug!("ignoring accept entry {entry:?}");
            }
            usable
        })
        .map(str::to_lowercase)
        .collect()
}

/// Shows the native file dialog and reads the size of every picked file.
///
/// Files whose metadata cannot be read are skipped. A cancelled dialog
/// yields an empty list.
pub async fn pick_files(multiple: bool, accept: Option<Vec<String>>) -> Vec<FileCandidate> {
    let mut dialog = rfd::AsyncFileDialog::new();
    if let Some(accept) = accept {
        let extensions = dialog_extensions(&accept);
        if !extensions.is_empty() {
            dialog = dialog.add_filter("Accepted files", &extensions);
        }
    }
    let handles = if multiple {
        dialog.pick_files().await.unwrap_or_default()
    } else {
        dialog.pick_file().await.into_iter().collect()
    };

    handles
        .iter()
        .filter_map(|handle| match FileCandidate::from_path(handle.path()) {
            Ok(candidate) => Some(candidate),
            Err(err) => {
                log::warn!("skipping {}: {err}", handle.path().display());
                None
            }
        })
        .collect()
}
