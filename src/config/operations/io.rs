use crate::config::types::ImagenConfig;
use crate::paths::PATH_IMAGEN;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_cfg() -> ImagenConfig {
    load_cfg_from(&PATH_IMAGEN.join("settings.json"))
}

pub fn save_cfg(config: &ImagenConfig) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(&*PATH_IMAGEN)?;
    save_cfg_to(&PATH_IMAGEN.join("settings.json"), config)
}

fn load_cfg_from(path: &Path) -> ImagenConfig {
    if let Ok(file) = File::open(path) {
        match serde_json::from_reader::<_, ImagenConfig>(BufReader::new(file)) {
            Ok(config) => return config,
            Err(e) => eprintln!("[imagen] Ignoring unreadable {}: {}", path.display(), e),
        }
    }

    // Return default settings if file doesn't exist or has error
    ImagenConfig::default()
}

fn save_cfg_to(path: &Path, config: &ImagenConfig) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("imagen-settings-{}.json", std::process::id()));
        let cfg = ImagenConfig {
            upload_url: "http://127.0.0.1:9000/api/files".to_string(),
            request_timeout_secs: Some(90),
            ..ImagenConfig::default()
        };

        save_cfg_to(&path, &cfg).unwrap();
        assert_eq!(load_cfg_from(&path), cfg);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = std::env::temp_dir().join(format!("imagen-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_cfg_from(&path), ImagenConfig::default());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("imagen-no-such-settings.json");
        assert_eq!(load_cfg_from(&path), ImagenConfig::default());
    }
}
