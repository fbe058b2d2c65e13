//! Create screen state
//!
//! Holds the draft, the upload result and the loading flags, and decides
//! whether a button press turns into a network job. The UI layer spawns the
//! returned jobs and feeds their outcomes back through [`CreateScreen::apply`].
//! Alerts are queued here and shown by the UI as blocking dialogs.

use crate::create::pure::{EMPTY_PROMPT_ALERT, NO_IMAGE_ALERT, error_alert, prompt_to_submit};
use crate::create::types::{
    CreateJob, CreateOutcome, Draft, ImageReference, LoadingFlags, UploadResult,
};

pub const VIEW_UPLOAD_LABEL: &str = "View Uploaded Image";

#[derive(Debug, Default)]
pub struct CreateScreen {
    pub draft: Draft,
    pub upload: UploadResult,
    pub flags: LoadingFlags,
    /// Bumped on every remount; outcomes from an older epoch are dropped
    epoch: u64,
    /// Bumped whenever the draft image is replaced, so the preview can reload
    image_revision: u64,
    /// At most one random-prompt request at a time
    fetching_prompt: bool,
    alerts: Vec<String>,
}

impl CreateScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn image_revision(&self) -> u64 {
        self.image_revision
    }

    fn set_image(&mut self, image: Option<ImageReference>) {
        self.draft.image = image;
        self.image_revision += 1;
    }

    /// Reset everything the screen holds, as if navigated away and back
    pub fn remount(&mut self) {
        self.epoch += 1;
        self.draft.prompt_text.clear();
        self.set_image(None);
        self.upload = UploadResult::default();
        self.flags = LoadingFlags::default();
        self.fetching_prompt = false;
        self.alerts.clear();
    }

    /// "Surprise me" pressed; None while a previous fetch is still running
    pub fn request_random_prompt(&mut self) -> Option<CreateJob> {
        if self.fetching_prompt {
            return None;
        }
        self.fetching_prompt = true;
        Some(CreateJob::FetchPrompt { epoch: self.epoch })
    }

    /// Generate pressed; None means no request must be issued
    pub fn request_generate(&mut self) -> Option<CreateJob> {
        if self.flags.generating {
            return None;
        }
        let Some(prompt) = prompt_to_submit(&self.draft.prompt_text) else {
            self.alerts.push(EMPTY_PROMPT_ALERT.to_string());
            return None;
        };
        let job = CreateJob::Generate {
            epoch: self.epoch,
            prompt: prompt.to_string(),
        };
        self.flags.generating = true;
        Some(job)
    }

    /// Upload pressed; None means no request must be issued
    pub fn request_upload(&mut self) -> Option<CreateJob> {
        if self.flags.uploading {
            return None;
        }
        let Some(image) = self.draft.image.clone() else {
            self.alerts.push(error_alert(NO_IMAGE_ALERT));
            return None;
        };
        self.flags.uploading = true;
        Some(CreateJob::Upload {
            epoch: self.epoch,
            image,
        })
    }

    /// Use a file from disk as the draft image
    pub fn select_image(&mut self, image: ImageReference) {
        self.set_image(Some(image));
    }

    pub fn can_fetch_prompt(&self) -> bool {
        !self.fetching_prompt
    }

    pub fn can_generate(&self) -> bool {
        !self.flags.generating
    }

    pub fn can_upload(&self) -> bool {
        !self.flags.uploading
    }

    /// Apply a worker outcome; returns false if it was stale and ignored
    pub fn apply(&mut self, outcome: CreateOutcome) -> bool {
        match outcome {
            CreateOutcome::Prompt { epoch, result } => {
                if epoch != self.epoch {
                    return false;
                }
                self.fetching_prompt = false;
                match result {
                    Ok(prompt) => self.draft.prompt_text = prompt,
                    Err(e) => self.alerts.push(error_alert(&e)),
                }
            }
            CreateOutcome::Generated { epoch, result } => {
                if epoch != self.epoch {
                    return false;
                }
                self.flags.generating = false;
                match result {
                    Ok(image) => self.set_image(Some(image)),
                    Err(e) => self.alerts.push(error_alert(&e)),
                }
            }
            CreateOutcome::Uploaded { epoch, result } => {
                if epoch != self.epoch {
                    return false;
                }
                self.flags.uploading = false;
                match result {
                    Ok(signed_url) => self.upload.signed_url = Some(signed_url),
                    Err(e) => self.alerts.push(error_alert(&e)),
                }
            }
        }
        true
    }

    /// Label and href of the link shown after a successful upload
    pub fn upload_link(&self) -> Option<(&'static str, &str)> {
        self.upload
            .signed_url
            .as_deref()
            .map(|url| (VIEW_UPLOAD_LABEL, url))
    }

    /// Drain queued alerts in the order they were raised
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline_image() -> ImageReference {
        ImageReference::Inline {
            mime: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_empty_prompt_issues_no_job() {
        let mut screen = CreateScreen::new();
        assert_eq!(screen.request_generate(), None);
        assert!(!screen.flags.generating);
        assert_eq!(screen.take_alerts(), vec!["Please provide a prompt".to_string()]);

        screen.draft.prompt_text = "   ".to_string();
        assert_eq!(screen.request_generate(), None);
        assert_eq!(screen.take_alerts().len(), 1);
    }

    #[test]
    fn test_prompt_fetch_replaces_prompt_exactly() {
        let mut screen = CreateScreen::new();
        screen.draft.prompt_text = "old".to_string();
        let job = screen.request_random_prompt().unwrap();
        assert!(screen.apply(CreateOutcome::Prompt {
            epoch: job.epoch(),
            result: Ok("  A lighthouse in a storm, ukiyo-e ".to_string()),
        }));
        assert_eq!(screen.draft.prompt_text, "  A lighthouse in a storm, ukiyo-e ");
        assert!(screen.take_alerts().is_empty());
    }

    #[test]
    fn test_prompt_fetch_failure_alerts_and_keeps_prompt() {
        let mut screen = CreateScreen::new();
        screen.draft.prompt_text = "mine".to_string();
        let job = screen.request_random_prompt().unwrap();
        screen.apply(CreateOutcome::Prompt {
            epoch: job.epoch(),
            result: Err("Failed to fetch prompt".to_string()),
        });
        assert_eq!(screen.draft.prompt_text, "mine");
        assert_eq!(screen.take_alerts(), vec!["Error: Failed to fetch prompt".to_string()]);
    }

    #[test]
    fn test_prompt_fetch_blocked_while_in_flight() {
        let mut screen = CreateScreen::new();
        let job = screen.request_random_prompt().unwrap();
        assert!(!screen.can_fetch_prompt());
        assert_eq!(screen.request_random_prompt(), None);

        screen.apply(CreateOutcome::Prompt {
            epoch: job.epoch(),
            result: Err("Failed to fetch prompt".to_string()),
        });
        assert!(screen.can_fetch_prompt());
        assert!(screen.request_random_prompt().is_some());

        screen.remount();
        assert!(screen.can_fetch_prompt());
    }

    #[test]
    fn test_generate_success_flag_cycle() {
        let mut screen = CreateScreen::new();
        screen.draft.prompt_text = "a red fox".to_string();

        let job = screen.request_generate().unwrap();
        assert_eq!(
            job,
            CreateJob::Generate {
                epoch: 0,
                prompt: "a red fox".to_string()
            }
        );
        assert!(screen.flags.generating);

        screen.apply(CreateOutcome::Generated {
            epoch: job.epoch(),
            result: Ok(inline_image()),
        });
        assert!(!screen.flags.generating);
        assert_eq!(screen.draft.image, Some(inline_image()));
        assert_eq!(screen.image_revision(), 1);
    }

    #[test]
    fn test_generate_failure_keeps_image() {
        let mut screen = CreateScreen::new();
        screen.draft.prompt_text = "a red fox".to_string();
        let previous = ImageReference::Remote("https://cdn.example/old.png".to_string());
        screen.draft.image = Some(previous.clone());

        let job = screen.request_generate().unwrap();
        assert!(screen.flags.generating);
        screen.apply(CreateOutcome::Generated {
            epoch: job.epoch(),
            result: Err("Image generation failed: HTTP 500 Internal Server Error".to_string()),
        });

        assert!(!screen.flags.generating);
        assert_eq!(screen.draft.image, Some(previous));
        assert_eq!(screen.image_revision(), 0);
        assert_eq!(
            screen.take_alerts(),
            vec!["Error: Image generation failed: HTTP 500 Internal Server Error".to_string()]
        );
    }

    #[test]
    fn test_generate_blocked_while_in_flight() {
        let mut screen = CreateScreen::new();
        screen.draft.prompt_text = "a red fox".to_string();
        assert!(screen.request_generate().is_some());
        assert!(!screen.can_generate());
        assert_eq!(screen.request_generate(), None);
        assert!(screen.take_alerts().is_empty());
    }

    #[test]
    fn test_upload_without_image_alerts() {
        let mut screen = CreateScreen::new();
        assert_eq!(screen.request_upload(), None);
        assert!(!screen.flags.uploading);
        assert_eq!(
            screen.take_alerts(),
            vec!["Error: No image generated to upload".to_string()]
        );
    }

    #[test]
    fn test_upload_success_sets_signed_url() {
        let mut screen = CreateScreen::new();
        screen.draft.image = Some(inline_image());

        let job = screen.request_upload().unwrap();
        assert_eq!(
            job,
            CreateJob::Upload {
                epoch: 0,
                image: inline_image()
            }
        );
        assert!(screen.flags.uploading);

        let url = "https://storage.example/bucket/a.png?X-Signature=abc".to_string();
        screen.apply(CreateOutcome::Uploaded {
            epoch: job.epoch(),
            result: Ok(url.clone()),
        });
        assert!(!screen.flags.uploading);
        assert_eq!(screen.upload.signed_url, Some(url.clone()));
        assert_eq!(screen.upload_link(), Some((VIEW_UPLOAD_LABEL, url.as_str())));
    }

    #[test]
    fn test_upload_blocked_while_in_flight() {
        let mut screen = CreateScreen::new();
        screen.draft.image = Some(inline_image());
        assert!(screen.request_upload().is_some());
        assert!(!screen.can_upload());
        assert_eq!(screen.request_upload(), None);
        assert!(screen.take_alerts().is_empty());
    }

    #[test]
    fn test_upload_failure_clears_flag() {
        let mut screen = CreateScreen::new();
        screen.select_image(ImageReference::Local("/tmp/cat.png".into()));
        let job = screen.request_upload().unwrap();
        screen.apply(CreateOutcome::Uploaded {
            epoch: job.epoch(),
            result: Err("Upload failed".to_string()),
        });
        assert!(!screen.flags.uploading);
        assert_eq!(screen.upload.signed_url, None);
        assert_eq!(screen.upload_link(), None);
        assert_eq!(screen.take_alerts(), vec!["Error: Upload failed".to_string()]);
    }

    #[test]
    fn test_generate_and_upload_flags_are_independent() {
        let mut screen = CreateScreen::new();
        screen.draft.prompt_text = "a red fox".to_string();
        screen.draft.image = Some(inline_image());
        assert!(screen.request_generate().is_some());
        assert!(screen.request_upload().is_some());
        assert!(screen.flags.generating && screen.flags.uploading);
    }

    #[test]
    fn test_stale_outcome_after_remount_is_ignored() {
        let mut screen = CreateScreen::new();
        screen.draft.prompt_text = "a red fox".to_string();
        let job = screen.request_generate().unwrap();

        screen.remount();
        assert_eq!(screen.draft, Draft::default());
        assert_eq!(screen.flags, LoadingFlags::default());

        let applied = screen.apply(CreateOutcome::Generated {
            epoch: job.epoch(),
            result: Ok(inline_image()),
        });
        assert!(!applied);
        assert_eq!(screen.draft.image, None);
        assert!(screen.take_alerts().is_empty());
        assert!(!screen.flags.generating);
    }

    #[test]
    fn test_failed_job_clears_its_flag() {
        let mut screen = CreateScreen::new();
        screen.draft.prompt_text = "a red fox".to_string();
        let job = screen.request_generate().unwrap();
        screen.apply(job.failed("builder error"));
        assert!(!screen.flags.generating);
        assert_eq!(screen.take_alerts(), vec!["Error: builder error".to_string()]);
    }

    #[test]
    fn test_remount_clears_upload_result() {
        let mut screen = CreateScreen::new();
        screen.upload.signed_url = Some("https://storage.example/x".to_string());
        screen.remount();
        assert_eq!(screen.upload, UploadResult::default());
        assert_eq!(screen.epoch(), 1);
    }
}
