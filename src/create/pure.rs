//! Pure functions for the create module
//!
//! These functions have no side effects and are deterministic.

mod image_ref;
mod prompt;
mod responses;

pub use image_ref::{parse_image_reference, sniff_mime, upload_file_name};
pub use prompt::{EMPTY_PROMPT_ALERT, NO_IMAGE_ALERT, error_alert, prompt_to_submit};
pub use responses::{GenerateResponse, PromptResponse, UploadResponse, upload_error_message};
