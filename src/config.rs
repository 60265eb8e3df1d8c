use std::env;
use std::path::PathBuf;

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub log_level: String,
    pub session_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ClientError> {
        let _ = dotenvy::dotenv();

        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api".to_string());
        if api_base_url.trim().is_empty() {
            return Err(ClientError::Validation(
                "API_BASE_URL cannot be empty".to_string(),
            ));
        }

        let session_path = match env::var("SESSION_PATH") {
            Ok(raw) => PathBuf::from(raw),
            Err(_) => env::temp_dir().join("laundry-session.json"),
        };

        Ok(Self {
            // trailing slash would double up when paths are appended
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            session_path,
        })
    }
}
