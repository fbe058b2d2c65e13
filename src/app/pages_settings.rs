// Settings page - endpoints and request options

use super::app::ImagenApp;
use crate::config::{ImagenConfig, save_cfg};
use crate::ui::responsive::LayoutMode;
use crate::ui::theme::colors;
use crate::util::msg;

use eframe::egui::{self, RichText, Ui};

impl ImagenApp {
    pub fn display_page_settings(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Settings").size(32.0).strong());
        ui.add_space(16.0);

        let field_width = match LayoutMode::from_ui(ui) {
            LayoutMode::Wide => 480.0,
            LayoutMode::Narrow => ui.available_width() - 140.0,
        };

        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([12.0, 10.0])
            .show(ui, |ui| {
                ui.label("Prompt endpoint");
                ui.add(egui::TextEdit::singleline(&mut self.options.prompt_url).desired_width(field_width));
                ui.end_row();

                ui.label("Image endpoint");
                ui.add(egui::TextEdit::singleline(&mut self.options.generate_url).desired_width(field_width));
                ui.end_row();

                ui.label("Upload endpoint");
                ui.add(egui::TextEdit::singleline(&mut self.options.upload_url).desired_width(field_width));
                ui.end_row();

                ui.label("User agent");
                ui.add(egui::TextEdit::singleline(&mut self.options.user_agent).desired_width(field_width));
                ui.end_row();

                ui.label("Request timeout");
                ui.horizontal(|ui| {
                    let mut limited = self.options.request_timeout_secs.is_some();
                    if ui.checkbox(&mut limited, "Limit").changed() {
                        self.options.request_timeout_secs = limited.then_some(120);
                    }
                    if let Some(secs) = &mut self.options.request_timeout_secs {
                        ui.add(egui::DragValue::new(secs).range(5..=3600).suffix(" s"));
                    } else {
                        ui.label(RichText::new("Wait as long as the server takes").small().color(colors::TEXT_MUTED));
                    }
                });
                ui.end_row();
            });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("Save Settings").clicked() {
                match save_cfg(&self.options) {
                    Ok(()) => println!("[imagen] Settings saved"),
                    Err(e) => msg("Error", &format!("Couldn't save settings: {}", e)),
                }
                self.tasks.reconfigure(&self.options);
            }
            if ui.button("Restore Defaults").clicked() {
                self.options = ImagenConfig::default();
                self.tasks.reconfigure(&self.options);
            }
        });

        ui.add_space(8.0);
        ui.label(
            RichText::new("Changes apply to requests started after saving.")
                .small()
                .color(colors::TEXT_MUTED),
        );
    }
}
