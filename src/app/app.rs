// Core app structure and main update loop

use super::tasks::TaskRunner;
use crate::config::{ImagenConfig, load_cfg};
use crate::create::{CreateJob, CreateScreen, ImageReference};
use crate::ui::MenuPage;
use crate::ui::theme;
use crate::util::msg;

use eframe::egui;

/// What the preview pane currently shows
pub struct Preview {
    pub uri: String,
    pub bytes: Option<egui::load::Bytes>,
}

pub struct ImagenApp {
    pub options: ImagenConfig,
    pub cur_page: MenuPage,
    pub screen: CreateScreen,
    pub preview: Option<Preview>,
    preview_revision: u64,
    pub(super) tasks: TaskRunner,
}

impl ImagenApp {
    pub fn new(upload_url_override: Option<String>) -> Self {
        let mut options = load_cfg();
        if let Some(url) = upload_url_override {
            println!("[imagen] Using upload endpoint {} for this session", url);
            options.upload_url = url;
        }
        println!(
            "[imagen] Endpoints: prompt={} generate={} upload={}",
            options.prompt_url, options.generate_url, options.upload_url
        );

        let tasks = TaskRunner::new(&options);
        let screen = CreateScreen::new();
        Self {
            options,
            cur_page: MenuPage::Create,
            preview_revision: screen.image_revision(),
            screen,
            preview: None,
            tasks,
        }
    }

    /// Switch pages; leaving the Create page throws its state away
    pub fn navigate(&mut self, ctx: &egui::Context, page: MenuPage) {
        if page == self.cur_page {
            return;
        }
        if self.cur_page == MenuPage::Create {
            self.screen.remount();
            self.refresh_preview(ctx);
        }
        self.cur_page = page;
    }

    /// Hand a job to a worker, applying the failure at once if it can't start
    pub fn dispatch(&mut self, ctx: &egui::Context, job: CreateJob) {
        if let Some(outcome) = self.tasks.spawn(ctx, job) {
            self.screen.apply(outcome);
        }
    }

    fn poll_tasks(&mut self) {
        for outcome in self.tasks.drain() {
            if !self.screen.apply(outcome) {
                println!(
                    "[imagen] Dropped result from before Create was reopened (now visit {})",
                    self.screen.epoch()
                );
            }
        }
    }

    /// Keep the preview in step with the draft image
    pub fn refresh_preview(&mut self, ctx: &egui::Context) {
        let revision = self.screen.image_revision();
        if revision == self.preview_revision {
            return;
        }
        self.preview_revision = revision;

        if let Some(old) = self.preview.take() {
            ctx.forget_image(&old.uri);
        }

        self.preview = self.screen.draft.image.as_ref().map(|image| match image {
            ImageReference::Inline { mime, bytes } => {
                let ext = mime.rsplit('/').next().unwrap_or("png");
                Preview {
                    uri: format!("bytes://imagen/preview-{}.{}", revision, ext),
                    bytes: Some(egui::load::Bytes::Shared(bytes.as_slice().into())),
                }
            }
            ImageReference::Remote(url) => Preview {
                uri: url.clone(),
                bytes: None,
            },
            ImageReference::Local(path) => Preview {
                uri: format!("file://{}", path.display()),
                bytes: None,
            },
        });
    }

    fn show_alerts(&mut self) {
        for alert in self.screen.take_alerts() {
            eprintln!("[imagen] {}", alert);
            msg("Imagen", &alert);
        }
    }
}

impl eframe::App for ImagenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_tasks();
        self.refresh_preview(ctx);

        egui::TopBottomPanel::top("menu_nav_panel")
            .frame(
                egui::Frame::NONE
                    .fill(theme::colors::BG_MID)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                self.display_panel_top(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::colors::BG_DARK)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| match self.cur_page {
                MenuPage::Create => self.display_page_create(ui),
                MenuPage::Settings => self.display_page_settings(ui),
            });

        // Blocking dialogs go last so the frame that raised them is already drawn
        self.show_alerts();

        if self.tasks.is_busy() {
            // Keeps the spinner turning while workers run
            ctx.request_repaint_after(std::time::Duration::from_millis(33));
        }
    }
}
