//! Configuration management for MovieOp

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::{ClientCredentials, parse_base_url};
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the movie catalog API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// OAuth2 client ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// OAuth2 client secret
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Values supplied on the command line or through the environment.
///
/// Any value present here wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".movieop").join("config.yaml"))
    }

    /// Resolve the config path, preferring an explicit one
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration, treating a missing file as empty
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an explicit path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Credentials live in this file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Apply command-line/environment overrides on top of the file values
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(ref url) = overrides.base_url {
            self.base_url = Some(url.clone());
        }
        if let Some(ref id) = overrides.client_id {
            self.client_id = Some(id.clone());
        }
        if let Some(ref secret) = overrides.client_secret {
            self.client_secret = Some(secret.clone());
        }
    }

    /// Configured API base URL, validated as an absolute http(s) URL
    pub fn base_url(&self) -> Result<&str> {
        let url = self
            .base_url
            .as_deref()
            .ok_or(ConfigError::MissingBaseUrl)?;
        parse_base_url(url)?;
        Ok(url)
    }

    /// Configured client credentials
    pub fn credentials(&self) -> Result<ClientCredentials> {
        match (self.client_id.as_deref(), self.client_secret.as_deref()) {
            (Some(id), Some(secret)) if !id.trim().is_empty() && !secret.is_empty() => {
                Ok(ClientCredentials::new(id, secret))
            }
            _ => Err(ConfigError::MissingCredentials.into()),
        }
    }

    /// Validate that everything needed to reach the API is present
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;
        self.credentials()?;
        Ok(())
    }
}
