//! Configuration management for jwt-fetch

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Placeholder endpoint used until a real deployment URL is configured
pub const DEFAULT_ENDPOINT: &str = "http://your-api-url.com/auth/get_jwt";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL of the credential exchange endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds (transport default when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".jwt-fetch").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, honoring an optional path override.
    ///
    /// A missing file at the default location yields defaults; a missing
    /// file at an explicitly requested location is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let resolved = Self::resolve_path(path)?;
        match Self::load_from(resolved) {
            Err(crate::error::Error::Config(ConfigError::NotFound(_))) if path.is_none() => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Replace the endpoint, rejecting anything that is not an absolute http(s) URL
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        validate_endpoint(endpoint)?;
        self.endpoint = endpoint.to_string();
        Ok(())
    }

    /// Check that the loaded values are usable
    pub fn validate(&self) -> Result<()> {
        validate_endpoint(&self.endpoint)?;
        if self.timeout_secs == Some(0) {
            return Err(
                ConfigError::Invalid("timeout_secs must be greater than 0".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Ensure the endpoint parses as an absolute http or https URL
pub fn validate_endpoint(endpoint: &str) -> Result<reqwest::Url> {
    let url = reqwest::Url::parse(endpoint)
        .map_err(|e| ConfigError::Invalid(format!("endpoint '{}': {}", endpoint, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid(format!(
            "endpoint '{}': unsupported scheme '{}'",
            endpoint, other
        ))
        .into()),
    }
}
