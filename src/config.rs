use serde::{Deserialize, Serialize};
use crate::{v_info, API_BASE_URL, DEFAULT_LANGUAGE};
use crate::verbosity::MAX_VERBOSITY;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DofusDbConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the DofusDB REST API, without trailing slash
    pub base_url: String,
    /// Language suffix for localized fields (`slug.pt`, `name.pt`)
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 0=quiet, 1=basic, 2=full
    pub verbosity: u8,
    /// Append every request/response pair to this file when set
    pub api_log_file: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl DofusDbConfig {
    /// Load configuration from file, falling back to defaults if it doesn't exist
    pub fn load_or_default(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            v_info!("📋 Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            Self::from_toml(&config_str)
        } else {
            v_info!("📋 No configuration at {}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    pub fn from_toml(config_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: DofusDbConfig = toml::from_str(config_str)?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(format!("base_url must start with http:// or https://, got '{}'", base_url));
        }

        if self.api.language.is_empty() || !self.api.language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("language must be a non-empty alphabetic code, got '{}'", self.api.language));
        }

        if self.logging.verbosity > MAX_VERBOSITY {
            return Err(format!("verbosity must be between 0 and {}", MAX_VERBOSITY));
        }

        Ok(())
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        v_info!("📋 Configuration Summary:");
        v_info!("   🌐 API: {}", self.api.base_url);
        v_info!("   🗣️ Language: {}", self.api.language);
        if let Some(path) = &self.logging.api_log_file {
            v_info!("   📝 API log: {}", path);
        }
    }
}
