use serde::{Deserialize, Serialize};

use crate::create::Endpoints;

pub const DEFAULT_PROMPT_URL: &str = "https://imagen-backend.onrender.com/random-prompt";
pub const DEFAULT_GENERATE_URL: &str = "https://imagen-backend.onrender.com/api/v1/dalle";
/// The upload proxy runs next to the web frontend
pub const DEFAULT_UPLOAD_URL: &str = "http://localhost:3000/api/files";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ImagenConfig {
    #[serde(default = "default_prompt_url")]
    pub prompt_url: String,
    #[serde(default = "default_generate_url")]
    pub generate_url: String,
    #[serde(default = "default_upload_url")]
    pub upload_url: String,
    /// None = wait for as long as the server takes
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_prompt_url() -> String {
    DEFAULT_PROMPT_URL.to_string()
}

fn default_generate_url() -> String {
    DEFAULT_GENERATE_URL.to_string()
}

fn default_upload_url() -> String {
    DEFAULT_UPLOAD_URL.to_string()
}

fn default_user_agent() -> String {
    format!("imagen/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ImagenConfig {
    fn default() -> Self {
        ImagenConfig {
            prompt_url: default_prompt_url(),
            generate_url: default_generate_url(),
            upload_url: default_upload_url(),
            request_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ImagenConfig {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            prompt_url: self.prompt_url.trim().to_string(),
            generate_url: self.generate_url.trim().to_string(),
            upload_url: self.upload_url.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ImagenConfig::default();
        assert_eq!(cfg.prompt_url, DEFAULT_PROMPT_URL);
        assert_eq!(cfg.generate_url, DEFAULT_GENERATE_URL);
        assert_eq!(cfg.upload_url, DEFAULT_UPLOAD_URL);
        assert_eq!(cfg.request_timeout_secs, None);
        assert!(cfg.user_agent.starts_with("imagen/"));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let cfg: ImagenConfig =
            serde_json::from_str(r#"{"upload_url":"http://127.0.0.1:8080/api/files"}"#).unwrap();
        assert_eq!(cfg.upload_url, "http://127.0.0.1:8080/api/files");
        assert_eq!(cfg.prompt_url, DEFAULT_PROMPT_URL);
        assert_eq!(cfg.generate_url, DEFAULT_GENERATE_URL);
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = ImagenConfig {
            request_timeout_secs: Some(120),
            ..ImagenConfig::default()
        };
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let back: ImagenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_endpoints_are_trimmed() {
        let cfg = ImagenConfig {
            upload_url: "  http://localhost:3000/api/files \n".to_string(),
            ..ImagenConfig::default()
        };
        assert_eq!(cfg.endpoints().upload_url, "http://localhost:3000/api/files");
    }
}
