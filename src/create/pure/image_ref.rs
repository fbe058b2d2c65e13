//! Image reference parsing
//!
//! The image endpoint answers with a single string that may be a data URL,
//! bare base64, or a plain http(s) URL. These helpers turn it into an
//! [`ImageReference`] and pick mime types and file names for uploads.

use base64::Engine;

use crate::create::types::{DEFAULT_IMAGE_MIME, ImageReference};

/// Parse the string returned by the image endpoint
pub fn parse_image_reference(raw: &str) -> Result<ImageReference, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Image endpoint returned no image".to_string());
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Ok(ImageReference::Remote(raw.to_string()));
    }

    if let Some(rest) = raw.strip_prefix("data:") {
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| "Malformed data URL: missing ','".to_string())?;
        let mut params = header.split(';');
        let mime = params.next().unwrap_or_default().trim();
        if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
            return Err("Unsupported data URL: payload is not base64".to_string());
        }
        let mime = if mime.is_empty() { DEFAULT_IMAGE_MIME } else { mime };
        let bytes = decode_base64(payload)?;
        return Ok(ImageReference::Inline {
            mime: mime.to_string(),
            bytes,
        });
    }

    // Bare base64 (what the dalle backend sends without a data: prefix)
    let bytes = decode_base64(raw)
        .map_err(|_| "Image endpoint returned an unrecognised image reference".to_string())?;
    Ok(ImageReference::Inline {
        mime: DEFAULT_IMAGE_MIME.to_string(),
        bytes,
    })
}

fn decode_base64(payload: &str) -> Result<Vec<u8>, String> {
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| format!("Failed to decode base64 image: {}", e))?;
    if bytes.is_empty() {
        return Err("Image endpoint returned an empty image".to_string());
    }
    Ok(bytes)
}

/// Sniff the mime type from image magic bytes, falling back to `fallback`
pub fn sniff_mime(bytes: &[u8], fallback: &str) -> String {
    match image::guess_format(bytes) {
        Ok(format) => format.to_mime_type().to_string(),
        Err(_) => fallback.to_string(),
    }
}

/// File extension to use for an upload of the given mime type
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "bin",
    }
}

/// Name sent with the multipart `file` part
pub fn upload_file_name(mime: &str) -> String {
    format!("imagen-upload.{}", extension_for_mime(mime))
}
