//! Create screen type definitions

use std::path::PathBuf;

pub type CreateResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Mime type assumed for bare base64 payloads without a `data:` prefix
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// An image the user can preview and upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageReference {
    /// Decoded from a `data:<mime>;base64,...` string (or bare base64)
    Inline { mime: String, bytes: Vec<u8> },
    /// An http(s) URL returned by the image endpoint
    Remote(String),
    /// A file picked from disk
    Local(PathBuf),
}

impl ImageReference {
    /// Short human-readable origin, shown under the preview
    pub fn describe(&self) -> String {
        match self {
            ImageReference::Inline { mime, bytes } => {
                format!("Generated image ({}, {} KiB)", mime, bytes.len().div_ceil(1024))
            }
            ImageReference::Remote(url) => format!("Generated image at {}", url),
            ImageReference::Local(path) => format!("Selected file {}", path.display()),
        }
    }
}

/// The in-progress prompt/image pairing the user is editing
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub prompt_text: String,
    pub image: Option<ImageReference>,
}

/// Outcome of the last successful upload
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadResult {
    pub signed_url: Option<String>,
}

/// Independent in-flight markers for the two guarded operations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub generating: bool,
    pub uploading: bool,
}

/// Bytes ready to be sent to the upload endpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadPayload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Work handed to a worker thread, tagged with the mount epoch that issued it
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateJob {
    FetchPrompt { epoch: u64 },
    Generate { epoch: u64, prompt: String },
    Upload { epoch: u64, image: ImageReference },
}

impl CreateJob {
    pub fn epoch(&self) -> u64 {
        match self {
            CreateJob::FetchPrompt { epoch }
            | CreateJob::Generate { epoch, .. }
            | CreateJob::Upload { epoch, .. } => *epoch,
        }
    }

    /// The outcome this job reports when it can't even be started
    pub fn failed(&self, message: &str) -> CreateOutcome {
        let epoch = self.epoch();
        match self {
            CreateJob::FetchPrompt { .. } => CreateOutcome::Prompt {
                epoch,
                result: Err(message.to_string()),
            },
            CreateJob::Generate { .. } => CreateOutcome::Generated {
                epoch,
                result: Err(message.to_string()),
            },
            CreateJob::Upload { .. } => CreateOutcome::Uploaded {
                epoch,
                result: Err(message.to_string()),
            },
        }
    }
}

/// What a worker thread reports back to the UI thread
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    Prompt { epoch: u64, result: Result<String, String> },
    Generated { epoch: u64, result: Result<ImageReference, String> },
    Uploaded { epoch: u64, result: Result<String, String> },
}

/// Where the three external services live
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub prompt_url: String,
    pub generate_url: String,
    pub upload_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_outcome_matches_job_kind() {
        let prompt = CreateJob::FetchPrompt { epoch: 3 };
        assert_eq!(
            prompt.failed("offline"),
            CreateOutcome::Prompt {
                epoch: 3,
                result: Err("offline".to_string())
            }
        );

        let generate = CreateJob::Generate {
            epoch: 4,
            prompt: "a red fox".to_string(),
        };
        assert_eq!(
            generate.failed("offline"),
            CreateOutcome::Generated {
                epoch: 4,
                result: Err("offline".to_string())
            }
        );

        let upload = CreateJob::Upload {
            epoch: 5,
            image: ImageReference::Remote("https://cdn.example/a.png".to_string()),
        };
        assert_eq!(
            upload.failed("offline"),
            CreateOutcome::Uploaded {
                epoch: 5,
                result: Err("offline".to_string())
            }
        );
    }
}
