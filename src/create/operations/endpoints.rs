//! Calls to the prompt, image and upload endpoints

use reqwest::blocking::Client;
use reqwest::blocking::multipart::{Form, Part};
use serde_json::json;

use crate::create::pure::{
    GenerateResponse, PromptResponse, UploadResponse, parse_image_reference,
    upload_error_message,
};
use crate::create::types::{CreateResult, ImageReference, UploadPayload};

/// GET a random prompt suggestion
pub fn fetch_random_prompt(client: &Client, url: &str) -> CreateResult<String> {
    println!("[imagen] create - Fetching random prompt from {}", url);
    let response = client.get(url).send()?;

    if !response.status().is_success() {
        eprintln!("[imagen] create - Prompt endpoint returned HTTP {}", response.status());
        return Err("Failed to fetch prompt".into());
    }

    let body: PromptResponse = response.json()?;
    Ok(body.prompt)
}

/// POST a prompt and return the generated image
pub fn generate_image(client: &Client, url: &str, prompt: &str) -> CreateResult<ImageReference> {
    println!("[imagen] create - Requesting image for prompt ({} chars)", prompt.chars().count());
    let response = client.post(url).json(&json!({ "prompt": prompt })).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("Image generation failed: HTTP {}", status).into());
    }

    let body: GenerateResponse = response.json()?;
    let source = body
        .image_source()
        .ok_or("Image endpoint response did not include an image")?;
    let image = parse_image_reference(source)?;
    Ok(image)
}

/// Download the bytes behind a remote image reference
pub fn download_image(client: &Client, url: &str) -> CreateResult<(Vec<u8>, Option<String>)> {
    println!("[imagen] create - Downloading generated image from {}", url);
    let response = client.get(url).send()?;

    if !response.status().is_success() {
        return Err(format!("Failed to download image: HTTP {}", response.status()).into());
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or(v).trim().to_string());
    let bytes = response.bytes()?;
    Ok((bytes.to_vec(), content_type))
}

/// POST the image as a multipart `file` part and return the signed URL
pub fn upload_file(client: &Client, url: &str, payload: UploadPayload) -> CreateResult<String> {
    println!(
        "[imagen] create - Uploading {} ({} bytes) to {}",
        payload.file_name,
        payload.bytes.len(),
        url
    );
    let part = Part::bytes(payload.bytes)
        .file_name(payload.file_name)
        .mime_str(&payload.mime)?;
    let form = Form::new().part("file", part);

    let response = client.post(url).multipart(form).send()?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().unwrap_or_default();
        eprintln!("[imagen] create - Upload endpoint returned HTTP {}", status);
        return Err(upload_error_message(&body).into());
    }

    let body: UploadResponse = response.json()?;
    match body.signed_url {
        Some(signed_url) if !signed_url.is_empty() => Ok(signed_url),
        _ => Err(body
            .error
            .unwrap_or_else(|| "Upload response did not include a signed URL".to_string())
            .into()),
    }
}
