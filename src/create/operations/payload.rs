use std::path::Path;

use crate::create::pure::sniff_mime;
use crate::create::types::{CreateResult, UploadPayload};

/// Read a file picked from disk into an upload payload
pub fn read_local_payload(path: &Path) -> CreateResult<UploadPayload> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("Couldn't read {}: {}", path.display(), e))?;
    if bytes.is_empty() {
        return Err(format!("{} is empty", path.display()).into());
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let mime = sniff_mime(&bytes, "application/octet-stream");

    Ok(UploadPayload {
        file_name,
        mime,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_local_payload() {
        let path = std::env::temp_dir().join(format!("imagen-payload-{}.png", std::process::id()));
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        std::fs::write(&path, png).unwrap();

        let payload = read_local_payload(&path).unwrap();
        assert_eq!(payload.mime, "image/png");
        assert_eq!(payload.bytes, png.to_vec());
        assert!(payload.file_name.starts_with("imagen-payload-"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_local_payload_missing_file() {
        let path = std::env::temp_dir().join("imagen-definitely-missing.png");
        assert!(read_local_payload(&path).is_err());
    }
}
