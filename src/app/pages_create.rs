// Create page - prompt form, preview, upload

use super::app::ImagenApp;
use crate::create::ImageReference;
use crate::ui::responsive::{LayoutMode, preview_size, truncate_text};
use crate::ui::theme::{self, colors};
use crate::util::image_file_dialog;

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

const PROMPT_PLACEHOLDER: &str = "An Impressionist oil painting of sunflowers in a purple vase…";

impl ImagenApp {
    pub fn display_page_create(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Create").size(32.0).strong());
        ui.add_space(4.0);
        ui.label(
            RichText::new("Generate an imaginative image through DALL-E AI")
                .color(colors::TEXT_MUTED),
        );
        ui.add_space(24.0);

        if LayoutMode::from_ui(ui).is_wide() {
            ui.columns(2, |columns| {
                self.display_create_form(&mut columns[0]);
                columns[0].add_space(16.0);
                self.display_create_upload(&mut columns[0]);
                self.display_create_preview(&mut columns[1]);
            });
        } else {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.display_create_form(ui);
                ui.add_space(16.0);
                self.display_create_preview(ui);
                ui.add_space(16.0);
                self.display_create_upload(ui);
            });
        }
    }

    fn display_create_form(&mut self, ui: &mut Ui) {
        let ctx = ui.ctx().clone();

        ui.horizontal(|ui| {
            ui.label(RichText::new("Prompt").strong());
            ui.add_space(8.0);
            let surprise = ui
                .add_enabled(
                    self.screen.can_fetch_prompt(),
                    egui::Button::new(format!("{} Surprise me", icons::SHUFFLE)).small(),
                )
                .on_hover_text("Fetch a random prompt");
            if surprise.clicked() {
                if let Some(job) = self.screen.request_random_prompt() {
                    self.dispatch(&ctx, job);
                }
            }
        });
        ui.add_space(4.0);

        let prompt_edit = ui.add(
            egui::TextEdit::singleline(&mut self.screen.draft.prompt_text)
                .hint_text(PROMPT_PLACEHOLDER)
                .desired_width(f32::INFINITY),
        );
        let submitted =
            prompt_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let label = match self.screen.flags.generating {
                true => "Generating...",
                false => "Generate",
            };
            let generate_btn = ui.add_enabled(
                self.screen.can_generate(),
                theme::primary_button(label, colors::GENERATE),
            );
            if generate_btn.clicked() || submitted {
                if let Some(job) = self.screen.request_generate() {
                    self.dispatch(&ctx, job);
                }
            }

            ui.add_space(8.0);
            let choose_btn = ui
                .button(format!("{} Choose File...", icons::FOLDER_OPEN))
                .on_hover_text("Use an image from disk instead");
            if choose_btn.clicked() {
                if let Ok(path) = image_file_dialog() {
                    println!("[imagen] Selected {}", path.display());
                    self.screen.select_image(ImageReference::Local(path));
                }
            }
        });
    }

    fn display_create_preview(&mut self, ui: &mut Ui) {
        let size = preview_size(ui.available_width());
        let prompt = self.screen.draft.prompt_text.clone();

        theme::preview_frame().show(ui, |ui| {
            ui.allocate_ui_with_layout(
                egui::vec2(size, size),
                egui::Layout::centered_and_justified(egui::Direction::TopDown),
                |ui| {
                    if self.screen.flags.generating {
                        ui.add(egui::widgets::Spinner::new().size(40.0));
                    } else if let Some(preview) = &self.preview {
                        let image = match &preview.bytes {
                            Some(bytes) => egui::Image::from_bytes(preview.uri.clone(), bytes.clone()),
                            None => egui::Image::from_uri(preview.uri.clone()),
                        };
                        let response = ui.add(image.max_width(size).max_height(size));
                        if !prompt.is_empty() {
                            response.on_hover_text(&prompt);
                        }
                    } else {
                        ui.label(
                            RichText::new(icons::IMAGE)
                                .size(96.0)
                                .color(colors::TEXT_MUTED.gamma_multiply(0.4)),
                        );
                    }
                },
            );
        });

        if let Some(image) = &self.screen.draft.image {
            ui.add_space(4.0);
            ui.label(
                RichText::new(truncate_text(&image.describe(), 72))
                    .small()
                    .color(colors::TEXT_MUTED),
            );
        }
    }

    fn display_create_upload(&mut self, ui: &mut Ui) {
        let ctx = ui.ctx().clone();

        let label = match self.screen.flags.uploading {
            true => "Uploading...",
            false => "Upload Image",
        };
        let upload_btn = ui.add_enabled(
            self.screen.can_upload(),
            theme::primary_button(label, colors::ACCENT),
        );
        if upload_btn.clicked() {
            if let Some(job) = self.screen.request_upload() {
                self.dispatch(&ctx, job);
            }
        }

        let Some((link_label, url)) = self.screen.upload_link() else {
            return;
        };
        let url = url.to_string();

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add(egui::Hyperlink::from_label_and_url(link_label, &url).open_in_new_tab(true))
                .on_hover_text(&url);
            ui.add_space(8.0);
            if ui
                .small_button(format!("{} Copy link", icons::CLIPBOARD))
                .clicked()
            {
                ui.ctx().copy_text(url.clone());
            }
        });
        ui.label(RichText::new(truncate_text(&url, 64)).small().color(colors::SUCCESS));
    }
}
