//! Response bodies of the three endpoints

use serde::Deserialize;

/// Fallback message when the upload endpoint fails without saying why
pub const UPLOAD_FAILED: &str = "Upload failed";

#[derive(Deserialize, Clone, Debug)]
pub struct PromptResponse {
    pub prompt: String,
}

/// The image endpoint has shipped both `photo` and `file` over time
#[derive(Deserialize, Clone, Debug, Default)]
pub struct GenerateResponse {
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
}

impl GenerateResponse {
    /// The image string, preferring `photo` when both are present
    pub fn image_source(&self) -> Option<&str> {
        self.photo
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.file.as_deref().filter(|s| !s.is_empty()))
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct UploadResponse {
    #[serde(default, rename = "signedUrl")]
    pub signed_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Build the error message for a non-OK upload response body
pub fn upload_error_message(body: &str) -> String {
    serde_json::from_str::<UploadResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| UPLOAD_FAILED.to_string())
}
