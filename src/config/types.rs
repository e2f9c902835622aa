//! Configuration type definitions

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FuncsyncResult;

use super::loader;

/// Polling configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// 0 waits forever
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            timeout_secs: 0,
        }
    }
}

impl PollingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn default_interval_secs() -> u64 {
    5
}

fn default_functions_dir() -> PathBuf {
    PathBuf::from("functions")
}

fn default_repository_root() -> PathBuf {
    PathBuf::from(".")
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Project used when no branch mapping matches
    #[serde(default)]
    pub default_project: Option<String>,

    #[serde(default = "default_functions_dir")]
    pub functions_dir: PathBuf,

    #[serde(default = "default_repository_root")]
    pub repository_root: PathBuf,

    /// Service-account key activated before any platform call
    #[serde(default)]
    pub key_file: Option<PathBuf>,

    #[serde(default)]
    pub api_endpoint: Option<String>,

    /// Branch name -> project
    #[serde(default)]
    pub environments: BTreeMap<String, String>,

    #[serde(default)]
    pub polling: PollingConfig,

    /// Explicit project (environment only)
    #[serde(skip)]
    pub project: Option<String>,

    /// Branch used for environment selection (environment only)
    #[serde(skip)]
    pub branch: Option<String>,

    /// Current revision (environment only)
    #[serde(skip)]
    pub revision: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_project: None,
            functions_dir: default_functions_dir(),
            repository_root: default_repository_root(),
            key_file: None,
            api_endpoint: None,
            environments: BTreeMap::new(),
            polling: PollingConfig::default(),
            project: None,
            branch: None,
            revision: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FuncsyncResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, collecting non-fatal warnings
    pub fn load_with_warnings(path: &Path) -> FuncsyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key in a config file that no setting reads
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// Environment variable whose value could not be parsed; the default is kept
    InvalidEnvValue { var: String, value: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnvValue { var, value } => {
                write!(f, "ignoring {}={:?}: not a number of seconds", var, value)
            }
        }
    }
}
