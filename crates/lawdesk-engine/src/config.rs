//! Application configuration
//!
//! Read from a TOML file; every section and key is optional. Environment
//! variables override the file.
//!
//! ```toml
//! [storage]
//! data_dir = "./lawdesk-data"
//! secure_dir = "./lawdesk-data/secure"
//!
//! [logging]
//! profile = "production"
//!
//! [session]
//! biometric_account = "ali.khan@lawfirm.pk"
//! ```

use std::path::{Path, PathBuf};

use lawdesk_core::errors::{ExError, ExErrorKind};
use lawdesk_core::logging_facility::Profile;
use lawdesk_store::errors::{io_error, Result};
use serde::Deserialize;

pub const ENV_DATA_DIR: &str = "LAWDESK_DATA_DIR";
pub const ENV_LOG_PROFILE: &str = "LAWDESK_LOG_PROFILE";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LawdeskConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory for the credential store; without it the session token is
    /// kept in the general store
    #[serde(default)]
    pub secure_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            secure_dir: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./lawdesk-data")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_profile")]
    pub profile: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
        }
    }
}

fn default_profile() -> String {
    "development".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionConfig {
    /// Account signed in by a successful biometric check
    #[serde(default = "default_biometric_account")]
    pub biometric_account: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            biometric_account: default_biometric_account(),
        }
    }
}

fn default_biometric_account() -> String {
    "ali.khan@lawfirm.pk".to_string()
}

impl LawdeskConfig {
    /// Load from `path`, or defaults if the file does not exist
    ///
    /// # Errors
    /// * `ERR_IO` - the file exists but cannot be read
    /// * `ERR_INVALID_INPUT` - the file is not valid TOML for this schema
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading configuration");
            let content = std::fs::read_to_string(path).map_err(|e| io_error("config_read", e))?;
            Self::parse(&content)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// # Errors
    /// * `ERR_INVALID_INPUT` - not valid TOML for this schema
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("config_parse")
                .with_message(format!("Failed to parse configuration: {}", e))
        })
    }

    /// Apply `LAWDESK_DATA_DIR` and `LAWDESK_LOG_PROFILE` from the process
    /// environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            self.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(profile) = lookup(ENV_LOG_PROFILE).filter(|v| !v.trim().is_empty()) {
            self.logging.profile = profile;
        }
        self
    }

    /// # Errors
    /// * `ERR_INVALID_INPUT` - unknown profile name
    pub fn log_profile(&self) -> Result<Profile> {
        self.logging.profile.parse().map_err(|reason: String| {
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("config_logging")
                .with_message(reason)
        })
    }
}
