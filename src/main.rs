mod app;
mod config;
mod create;
mod paths;
mod ui;
mod util;

use crate::app::ImagenApp;

fn main() -> eframe::Result {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let mut upload_url = None;
    if let Some(index) = args.iter().position(|arg| arg == "--upload-url") {
        if let Some(next_arg) = args.get(index + 1) {
            upload_url = Some(next_arg.clone());
        } else {
            eprintln!("{}", USAGE_TEXT);
            std::process::exit(1);
        }
    }

    let fullscreen = args.iter().any(|arg| arg == "--fullscreen");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([420.0, 480.0])
            .with_fullscreen(fullscreen),
        ..Default::default()
    };

    println!("[imagen] Starting eframe app...");

    eframe::run_native(
        "Imagen",
        options,
        Box::new(move |cc| {
            // This gives us image support:
            egui_extras::install_image_loaders(&cc.egui_ctx);
            crate::ui::theme::apply_theme(&cc.egui_ctx);

            Ok(Box::new(ImagenApp::new(upload_url)))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: imagen [OPTIONS]

Options:
    --upload-url <url>    Upload endpoint to use for this session (default from settings.json)
    --fullscreen          Start the GUI in fullscreen mode
    --help                Show this message
"#;
