//! Colors and global egui style

use eframe::egui::{self, Color32, Stroke};

pub mod colors {
    use eframe::egui::Color32;

    pub const BG_DARK: Color32 = Color32::from_rgb(0x18, 0x19, 0x1d);
    pub const BG_MID: Color32 = Color32::from_rgb(0x22, 0x23, 0x28);
    pub const BG_LIGHT: Color32 = Color32::from_rgb(0x33, 0x35, 0x3c);
    pub const ACCENT: Color32 = Color32::from_rgb(0x64, 0x69, 0xff);
    pub const ACCENT_DIM: Color32 = Color32::from_rgb(0x3c, 0x40, 0x99);
    pub const GENERATE: Color32 = Color32::from_rgb(0x15, 0x80, 0x3d);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xee, 0xee, 0xf0);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x66, 0x6e, 0x75);
    pub const SUCCESS: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80);
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    ctx.style_mut(|style| {
        let visuals = &mut style.visuals;
        *visuals = egui::Visuals::dark();
        visuals.panel_fill = colors::BG_DARK;
        visuals.window_fill = colors::BG_MID;
        visuals.extreme_bg_color = colors::BG_MID;
        visuals.hyperlink_color = colors::ACCENT;
        visuals.selection.bg_fill = colors::ACCENT_DIM;
        visuals.selection.stroke = Stroke::new(1.0, colors::ACCENT);
        visuals.override_text_color = Some(colors::TEXT_PRIMARY);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
    });
}

/// Filled button used for the two primary actions
pub fn primary_button(text: &str, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(Color32::WHITE))
        .fill(fill)
        .corner_radius(6.0)
        .min_size(egui::vec2(120.0, 32.0))
}

/// Frame around the image preview
pub fn preview_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(colors::BG_MID)
        .stroke(Stroke::new(1.0, colors::BG_LIGHT))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(12))
}
