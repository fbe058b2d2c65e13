//! Upload pipeline: turn whatever image the draft holds into bytes, then upload

use reqwest::blocking::Client;

use crate::create::operations::{download_image, read_local_payload, upload_file};
use crate::create::pure::{sniff_mime, upload_file_name};
use crate::create::types::{CreateResult, ImageReference, UploadPayload};

/// Resolve an image reference into the bytes that get uploaded
///
/// Inline images are sent as decoded; remote images are downloaded first;
/// local files are read from disk. The upload always carries the real image.
pub fn resolve_payload(client: &Client, image: &ImageReference) -> CreateResult<UploadPayload> {
    match image {
        ImageReference::Inline { mime, bytes } => {
            let mime = sniff_mime(bytes, mime);
            Ok(UploadPayload {
                file_name: upload_file_name(&mime),
                mime,
                bytes: bytes.clone(),
            })
        }
        ImageReference::Remote(url) => {
            let (bytes, content_type) = download_image(client, url)?;
            if bytes.is_empty() {
                return Err("Downloaded image is empty".into());
            }
            let fallback = content_type.unwrap_or_else(|| "application/octet-stream".to_string());
            let mime = sniff_mime(&bytes, &fallback);
            Ok(UploadPayload {
                file_name: upload_file_name(&mime),
                mime,
                bytes,
            })
        }
        ImageReference::Local(path) => read_local_payload(path),
    }
}

/// Upload the draft image and return the signed URL
pub fn upload_image(client: &Client, upload_url: &str, image: &ImageReference) -> CreateResult<String> {
    let payload = resolve_payload(client, image)?;
    let signed_url = upload_file(client, upload_url, payload)?;
    println!("[imagen] create - Upload complete: {}", signed_url);
    Ok(signed_url)
}
