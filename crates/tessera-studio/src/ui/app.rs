//! Main application state and iced implementation

use std::path::PathBuf;

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use tessera_core::{render_export, ExportOptions};

use super::form::{self, ButtonForm};
use super::import_dialog::{self, ImportDialog};
use super::message::Message;
use super::modals::with_modal_overlay;
use super::notification::{self, Notice};
use super::preview;
use crate::clipboard;
use crate::config::{self, Config};
use crate::import::import_style;

/// Main application
pub struct StudioApp {
    /// Button being built
    form: ButtonForm,
    /// Template and wrapping for Export
    export: ExportOptions,
    /// Path to config file
    config_path: PathBuf,
    /// Export/import result dialog, if open
    notice: Option<Notice>,
    /// Import dialog, if open
    import: Option<ImportDialog>,
    /// Status line for saving defaults
    status: String,
}

impl StudioApp {
    /// Create a new application instance
    pub fn new() -> (Self, Task<Message>) {
        let config_path = config::default_config_path();
        let config = config::load_config(&config_path);

        (Self::with_config(config, config_path), Task::none())
    }

    /// Create an instance from an already-loaded config
    pub fn with_config(config: Config, config_path: PathBuf) -> Self {
        Self {
            form: ButtonForm::new(config.button),
            export: config.export,
            config_path,
            notice: None,
            import: None,
            status: String::new(),
        }
    }

    pub fn form(&self) -> &ButtonForm {
        &self.form
    }

    pub fn export_options(&self) -> &ExportOptions {
        &self.export
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn import_dialog(&self) -> Option<&ImportDialog> {
        self.import.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Markup Export would copy right now
    pub fn markup(&self) -> String {
        render_export(&self.form.style, &self.export)
    }

    /// Update state based on message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Form
            Message::Counter(field, message) => {
                self.form.handle_counter(field, message);
            }
            Message::SetLabel(label) => {
                self.form.set_label(label);
            }
            Message::SetColor(field, hex) => {
                self.form.set_color(field, hex);
            }

            // Export
            Message::SelectTemplate(template) => {
                self.export.template = template;
            }
            Message::ToggleWrapHtml(wrap) => {
                self.export.wrap_html = wrap;
            }
            Message::Export => {
                let markup = self.markup();
                log::info!(
                    "Export: {:?} template, wrap_html={}",
                    self.export.template,
                    self.export.wrap_html
                );
                return Task::perform(clipboard::copy(markup), |result| {
                    Message::ExportComplete(result.map_err(|e| e.to_string()))
                });
            }
            Message::ExportComplete(result) => match result {
                Ok(bytes) => {
                    log::info!("ExportComplete: copied {} bytes", bytes);
                    self.notice = Some(Notice::copied(bytes));
                }
                Err(e) => {
                    log::error!("ExportComplete: FAILED - {}", e);
                    self.notice = Some(Notice::failed(&e));
                }
            },
            Message::DismissNotice => {
                self.notice = None;
            }

            // Import
            Message::OpenImport => {
                self.import = Some(ImportDialog::new());
            }
            Message::ImportEdited(action) => {
                if let Some(dialog) = self.import.as_mut() {
                    dialog.perform(action);
                }
            }
            Message::ConfirmImport => {
                let Some(dialog) = self.import.as_mut() else {
                    return Task::none();
                };
                match import_style(&dialog.text(), &self.form.style) {
                    Ok(imported) => {
                        self.form = ButtonForm::new(imported.style);
                        self.notice = Some(Notice::imported(&imported.adjusted));
                        self.import = None;
                    }
                    Err(e) => {
                        log::warn!("ConfirmImport: {}", e);
                        dialog.set_error(e.to_string());
                    }
                }
            }
            Message::CloseImport => {
                self.import = None;
            }

            // Defaults
            Message::SaveDefaults => {
                let config = Config {
                    button: self.form.style.clone(),
                    export: self.export,
                };
                let config_path = self.config_path.clone();
                self.status = String::from("Saving...");

                return Task::perform(config::persist(config, config_path), |result| {
                    Message::SaveDefaultsComplete(result.map_err(|e| format!("{:#}", e)))
                });
            }
            Message::SaveDefaultsComplete(result) => match result {
                Ok(()) => {
                    log::info!("Defaults saved successfully");
                    self.status = String::from("Saved as default");
                }
                Err(e) => {
                    log::error!("Failed to save defaults: {}", e);
                    self.status = format!("Failed to save: {}", e);
                }
            },
        }

        Task::none()
    }

    /// Render the UI
    pub fn view(&self) -> Element<'_, Message> {
        let header = self.view_header();

        let panels = row![form::view(&self.form), preview::view(&self.form.style, &self.export)]
            .spacing(12)
            .height(Length::Fill);

        let base: Element<Message> = container(column![header, panels].spacing(10))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into();

        if let Some(notice) = &self.notice {
            with_modal_overlay(base, notification::view(notice), Message::DismissNotice)
        } else if let Some(dialog) = &self.import {
            with_modal_overlay(base, import_dialog::view(dialog), Message::CloseImport)
        } else {
            base
        }
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Hold timers for the form's counting inputs
    pub fn subscription(&self) -> Subscription<Message> {
        self.form.subscription()
    }

    fn view_header(&self) -> Element<'_, Message> {
        let save_btn = button(text("Save as default"))
            .on_press(Message::SaveDefaults)
            .style(button::secondary);

        row![
            text("tessera").size(24),
            Space::new().width(Length::Fill),
            text(&self.status).size(14),
            save_btn,
        ]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
    }
}
