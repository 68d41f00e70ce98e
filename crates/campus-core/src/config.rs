use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::CampusError;
use crate::lang::{Language, LanguageMap};

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "CAMPUS_API_URL";

/// Top-level portal configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub campus: CampusConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub languages: LanguageMap,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub default_language: Language,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Optional log file. Empty = stderr only.
    #[serde(default)]
    pub log_file: String,
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            default_language: Language::default(),
            log_level: default_log_level(),
            log_file: String::new(),
        }
    }
}

/// Backend REST API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the backend, e.g. `https://api.example.edu`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Send `Accept-Language` alongside the `lang` query parameter.
    #[serde(default = "default_true")]
    pub send_accept_language: bool,
    /// Items per page for client-side pagination of long lists.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            send_accept_language: true,
            page_size: default_page_size(),
        }
    }
}

/// Request cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_name() -> String {
    "Campus".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_page_size() -> usize {
    10
}
fn default_cache_ttl() -> u64 {
    300
}
fn default_true() -> bool {
    true
}

impl Config {
    /// Reject values the client cannot work with.
    pub fn validate(&self) -> Result<(), CampusError> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CampusError::Config(format!(
                "api.base_url must start with http:// or https://, got '{url}'"
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(CampusError::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url.trim().to_string();
            }
        }
    }
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, CampusError> {
    let config: Config = toml::from_str(content)
        .map_err(|e| CampusError::Config(format!("failed to parse config: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist. `CAMPUS_API_URL`
/// overrides the backend URL either way.
pub fn load(path: &str) -> Result<Config, CampusError> {
    let path = Path::new(path);
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CampusError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str::<Config>(&content)
            .map_err(|e| CampusError::Config(format!("failed to parse config: {e}")))?
    } else {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        Config::default()
    };
    config.apply_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.campus.default_language, Language::Ru);
        assert_eq!(cfg.api.timeout_secs, 15);
        assert!(cfg.cache.enabled);
        assert_eq!(cfg.cache.ttl_secs, 300);
        assert_eq!(cfg.languages.kg, "kg");
    }

    #[test]
    fn test_parse_full() {
        let cfg = parse(
            r#"
            [campus]
            name = "KSTU"
            default_language = "kg"
            log_level = "debug"

            [api]
            base_url = "https://api.example.edu"
            timeout_secs = 5
            send_accept_language = false

            [languages]
            kg = "ky"

            [cache]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.campus.name, "KSTU");
        assert_eq!(cfg.campus.default_language, Language::Kg);
        assert_eq!(cfg.api.base_url, "https://api.example.edu");
        assert!(!cfg.api.send_accept_language);
        assert_eq!(cfg.api.page_size, 10);
        assert_eq!(cfg.languages.backend_code(Language::Kg), "ky");
        assert!(!cfg.cache.enabled);
        assert_eq!(cfg.cache.ttl_secs, 300);
    }

    #[test]
    fn test_parse_empty_is_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.campus.name, "Campus");
    }

    #[test]
    fn test_rejects_bad_url() {
        let err = parse("[api]\nbase_url = \"ftp://x\"").unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        assert!(parse("[api]\ntimeout_secs = 0").is_err());
    }

    #[test]
    fn test_default_language_accepts_aliases() {
        for raw in ["ky", "KG", " kyrgyz "] {
            let cfg = parse(&format!("[campus]\ndefault_language = \"{raw}\"")).unwrap();
            assert_eq!(cfg.campus.default_language, Language::Kg, "{raw}");
        }
        let cfg = parse("[campus]\ndefault_language = \"RU\"").unwrap();
        assert_eq!(cfg.campus.default_language, Language::Ru);
    }

    #[test]
    fn test_rejects_unknown_language() {
        assert!(parse("[campus]\ndefault_language = \"de\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[campus]\nname = \"From file\"").unwrap();
        let cfg = load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.campus.name, "From file");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let cfg = load(missing.to_str().unwrap()).unwrap();
        assert_eq!(cfg.campus.name, "Campus");
    }
}
