use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use symscope_api::FeatureFlags;
use url::Url;

use crate::error::{Result, SymscopeError};

pub const DEFAULT_ENDPOINT: &str = "https://sourcegraph.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Hidden directory under the home directory holding config and logs.
pub const SYMSCOPE_DIR: &str = ".symscope";
pub const CONFIG_FILENAME: &str = "config.json";

pub const ENDPOINT_ENV: &str = "SRC_ENDPOINT";
pub const ACCESS_TOKEN_ENV: &str = "SRC_ACCESS_TOKEN";

/// Client configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the instance, without a trailing slash.
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub timeout_secs: u64,
    pub features: FeatureFlags,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            features: FeatureFlags::default(),
        }
    }
}

pub fn symscope_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SYMSCOPE_DIR)
}

pub fn default_config_path() -> PathBuf {
    symscope_home().join(CONFIG_FILENAME)
}

impl ClientConfig {
    /// Loads `~/.symscope/config.json` and applies environment overrides.
    /// Validation is left to the caller, so later overrides (command-line
    /// flags) can still replace a bad value.
    pub fn load_unvalidated() -> Result<Self> {
        Self::load_layered(&default_config_path(), |key| std::env::var(key).ok())
    }

    /// Reads `path` and applies the environment overrides found by `lookup`.
    pub fn load_layered<F>(path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::load_from(path)?;
        config.apply_env(lookup);
        Ok(config)
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            SymscopeError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            SymscopeError::Config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Writes the config through a temporary file and a rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = path.with_extension("tmp");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// Overrides endpoint and token from `SRC_ENDPOINT` / `SRC_ACCESS_TOKEN`.
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(token) = lookup(ACCESS_TOKEN_ENV).filter(|v| !v.trim().is_empty()) {
            self.access_token = Some(token);
        }
    }

    /// Normalizes the endpoint and rejects values the transport cannot use.
    pub fn validate(&mut self) -> Result<()> {
        let endpoint = self.endpoint.trim().trim_end_matches('/');
        if endpoint.is_empty() {
            return Err(SymscopeError::Config("endpoint is empty".to_string()));
        }

        let parsed = Url::parse(endpoint).map_err(|e| {
            SymscopeError::Config(format!("invalid endpoint '{}': {}", endpoint, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SymscopeError::Config(format!(
                "endpoint '{}' must use http or https",
                endpoint
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SymscopeError::Config("timeout_secs must be positive".to_string()));
        }

        self.endpoint = endpoint.to_string();
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symscope_api::Feature;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn save_then_load_keeps_features() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);

        let mut config = ClientConfig::default();
        config.features.enable(Feature::CodeLens);
        config.access_token = Some("secret".into());
        config.save_to(&path).unwrap();

        let loaded = ClientConfig::load_from(&path).unwrap();
        assert!(loaded.features.is_enabled(Feature::CodeLens));
        assert_eq!(loaded.access_token.as_deref(), Some("secret"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, r#"{"endpoint": "https://x.test", "colour": "blue"}"#).unwrap();
        let err = ClientConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, SymscopeError::Config(_)));

        std::fs::write(&path, r#"{"features": {"lang-cobol": true}}"#).unwrap();
        assert!(ClientConfig::load_from(&path).is_err());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, r#"{"features": {"lang-python": true}}"#).unwrap();
        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.features.lang_python);
    }

    #[test]
    fn env_overrides_endpoint_and_token() {
        let mut config = ClientConfig::default();
        config.apply_env(|key| match key {
            ENDPOINT_ENV => Some("http://localhost:3080/".to_string()),
            ACCESS_TOKEN_ENV => Some("tok".to_string()),
            _ => None,
        });
        config.validate().unwrap();
        assert_eq!(config.endpoint, "http://localhost:3080");
        assert_eq!(config.access_token.as_deref(), Some("tok"));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut config = ClientConfig::default();
        config.apply_env(|_| Some("  ".to_string()));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn layered_load_defers_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, r#"{"endpoint": "ftp://file.example"}"#).unwrap();

        let mut config = ClientConfig::load_layered(&path, |key| match key {
            ACCESS_TOKEN_ENV => Some("tok".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.endpoint, "ftp://file.example");
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_endpoints() {
        for bad in ["", "/", "not a url", "ftp://example.com"] {
            let mut config = ClientConfig {
                endpoint: bad.to_string(),
                ..ClientConfig::default()
            };
            assert!(config.validate().is_err(), "accepted {bad:?}");
        }
    }
}
