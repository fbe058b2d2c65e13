//! Responsive layout utilities for adapting UI to available width

use eframe::egui::Ui;

/// Layout mode based on available width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// >640px - form and preview side by side
    Wide,
    /// <=640px - preview stacked under the form
    Narrow,
}

impl LayoutMode {
    /// Determine layout mode from pixel width
    pub fn from_width(width: f32) -> Self {
        if width > 640.0 {
            LayoutMode::Wide
        } else {
            LayoutMode::Narrow
        }
    }

    /// Determine layout mode from UI's available width
    pub fn from_ui(ui: &Ui) -> Self {
        Self::from_width(ui.available_width())
    }

    pub fn is_wide(&self) -> bool {
        matches!(self, LayoutMode::Wide)
    }
}

/// Edge length of the square preview for a given available width
pub fn preview_size(available: f32) -> f32 {
    (available - 24.0).clamp(192.0, 512.0)
}

/// Truncate text to max characters with ellipsis if needed
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else if max_len > 3 {
        let head: String = text.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        text.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_from_width() {
        assert_eq!(LayoutMode::from_width(1080.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(640.0), LayoutMode::Narrow);
        assert_eq!(LayoutMode::from_width(320.0), LayoutMode::Narrow);
    }

    #[test]
    fn test_preview_size_is_clamped() {
        assert_eq!(preview_size(100.0), 192.0);
        assert_eq!(preview_size(324.0), 300.0);
        assert_eq!(preview_size(2000.0), 512.0);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("https://storage.example/abc", 12), "https://s...");
        assert_eq!(truncate_text("héllo wörld", 8), "héllo...");
        assert_eq!(truncate_text("abcdef", 2), "ab");
    }
}
