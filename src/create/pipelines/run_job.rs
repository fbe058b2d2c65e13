//! Execute one create job on the current (worker) thread

use reqwest::blocking::Client;

use crate::create::operations::{fetch_random_prompt, generate_image};
use crate::create::pipelines::upload_image::upload_image;
use crate::create::types::{CreateJob, CreateOutcome, Endpoints};

/// Run a job to completion, flattening errors to strings for the UI thread
pub fn run_job(client: &Client, endpoints: &Endpoints, job: CreateJob) -> CreateOutcome {
    match job {
        CreateJob::FetchPrompt { epoch } => {
            let result = fetch_random_prompt(client, &endpoints.prompt_url)
                .map_err(|e| e.to_string());
            log_failure("Prompt fetch", &result);
            CreateOutcome::Prompt { epoch, result }
        }
        CreateJob::Generate { epoch, prompt } => {
            let result = generate_image(client, &endpoints.generate_url, &prompt)
                .map_err(|e| e.to_string());
            log_failure("Image generation", &result);
            CreateOutcome::Generated { epoch, result }
        }
        CreateJob::Upload { epoch, image } => {
            let result = upload_image(client, &endpoints.upload_url, &image)
                .map_err(|e| e.to_string());
            log_failure("Upload", &result);
            CreateOutcome::Uploaded { epoch, result }
        }
    }
}

fn log_failure<T>(what: &str, result: &Result<T, String>) {
    if let Err(e) = result {
        eprintln!("[imagen] create - {} failed: {}", what, e);
    }
}
