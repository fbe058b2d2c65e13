use super::app::ImagenApp;
use crate::ui::MenuPage;

use eframe::egui::RichText;
use eframe::egui::{self, Ui};
use egui_phosphor::regular as icons;

impl ImagenApp {
    pub fn display_panel_top(&mut self, ui: &mut Ui) {
        let ctx = ui.ctx().clone();

        ui.horizontal(|ui| {
            ui.add_space(4.0);
            let create_btn = ui.add(
                egui::Button::new(format!("{} Create", icons::SPARKLE))
                    .min_size(egui::vec2(70.0, 28.0))
                    .selected(self.cur_page == MenuPage::Create),
            );
            if create_btn.clicked() {
                self.navigate(&ctx, MenuPage::Create);
            }

            let settings_btn = ui.add(
                egui::Button::new(format!("{} Settings", icons::GEAR))
                    .min_size(egui::vec2(70.0, 28.0))
                    .selected(self.cur_page == MenuPage::Settings),
            );
            if settings_btn.clicked() {
                self.navigate(&ctx, MenuPage::Settings);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let close_btn = ui
                    .add(egui::Button::new(icons::X).min_size(egui::vec2(28.0, 28.0)))
                    .on_hover_text("Close");
                if close_btn.clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }

                ui.add_space(8.0);
                ui.label(RichText::new(format!("v{}", env!("CARGO_PKG_VERSION"))).small().weak());
            });
        });
    }
}
