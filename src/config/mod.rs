// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::BannerError;

pub mod logging;
pub mod store;

pub use logging::{LogFormat, LoggingConfig};
pub use store::{StoreBackend, StoreConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub link_policy: LinkPolicyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Host site information consulted by the display name fallback chain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title (may be empty)
    #[serde(default)]
    pub title: String,
}

/// Referral link matching policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkPolicyConfig {
    /// Require the whole submitted value to be the referral URL
    /// (default: false, the URL may appear anywhere in the value)
    #[serde(default)]
    pub anchored: bool,
}

impl Config {
    /// Configuration used when no file is given: memory store, empty title
    pub fn in_memory(site_title: impl Into<String>) -> Self {
        Self {
            site: SiteConfig {
                title: site_title.into(),
            },
            store: StoreConfig {
                backend: StoreBackend::Memory,
                ..StoreConfig::default()
            },
            link_policy: LinkPolicyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, BannerError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| BannerError::Config(e.to_string()))?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                BannerError::Config(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        serde_yaml::from_str(&substituted).map_err(|e| BannerError::Config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BannerError> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            BannerError::Config(format!("Failed to read config file: {}", e))
        })?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), BannerError> {
        self.store.validate().map_err(BannerError::Config)?;

        if self.logging.level.trim().is_empty() {
            return Err(BannerError::Config(
                "logging.level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
