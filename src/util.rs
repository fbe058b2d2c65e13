use crate::paths::PATH_HOME;

use dialog::DialogBox;
use rfd::FileDialog;
use std::error::Error;
use std::path::PathBuf;

/// Blocking native message box
pub fn msg(title: &str, contents: &str) {
    let _ = alert_dialog(title, contents).show();
}

fn alert_dialog(title: &str, contents: &str) -> dialog::Message {
    let mut message = dialog::Message::new(contents);
    message.title(title);
    message
}

pub fn image_file_dialog() -> Result<PathBuf, Box<dyn Error>> {
    let file = FileDialog::new()
        .set_title("Select Image")
        .set_directory(&*PATH_HOME)
        .add_filter("Images", &["png", "jpg", "jpeg", "webp", "gif"])
        .pick_file()
        .ok_or("No file selected")?;
    Ok(file)
}
