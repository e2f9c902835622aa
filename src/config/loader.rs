//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FuncsyncError, FuncsyncResult};

use super::types::{Config, ConfigWarning};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "funcsync.toml";

/// Configuration after layering, with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the settings were read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FuncsyncResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| FuncsyncError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FuncsyncError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration in priority order:
/// explicit `--config` file, project `funcsync.toml`, user config, defaults.
/// Environment overrides are applied on top of whichever file wins.
pub fn load_layered(explicit: Option<&Path>, working_dir: &Path) -> FuncsyncResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = working_dir.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let (config, mut warnings) = match &candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(path)?
        }
        None => (Config::default(), Vec::new()),
    };

    let (config, env_warnings) = with_env_overrides(config);
    warnings.extend(env_warnings);

    Ok(LoadedConfig {
        config,
        warnings,
        source: candidate,
    })
}

/// `~/.config/funcsync/config.toml` (platform config dir)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("funcsync").join("config.toml"))
}

/// Apply environment variable overrides (FUNCSYNC_* prefix)
pub fn with_env_overrides(config: Config) -> (Config, Vec<ConfigWarning>) {
    apply_env(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_env<F>(mut config: Config, lookup: F) -> (Config, Vec<ConfigWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(project) = non_empty("FUNCSYNC_PROJECT") {
        config.project = Some(project.trim().to_string());
    }
    if let Some(branch) = non_empty("FUNCSYNC_BRANCH") {
        config.branch = Some(branch.trim().to_string());
    }
    if let Some(revision) = non_empty("FUNCSYNC_REVISION") {
        config.revision = Some(revision.trim().to_string());
    }
    if let Some(dir) = non_empty("FUNCSYNC_FUNCTIONS_DIR") {
        config.functions_dir = PathBuf::from(dir.trim());
    }
    if let Some(key_file) = non_empty("FUNCSYNC_KEY_FILE") {
        config.key_file = Some(PathBuf::from(key_file.trim()));
    }

    if let Some(value) = non_empty("FUNCSYNC_POLL_INTERVAL") {
        match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => config.polling.interval_secs = secs,
            _ => warnings.push(ConfigWarning::InvalidEnvValue {
                var: "FUNCSYNC_POLL_INTERVAL".to_string(),
                value,
            }),
        }
    }
    if let Some(value) = non_empty("FUNCSYNC_POLL_TIMEOUT") {
        match value.trim().parse::<u64>() {
            Ok(secs) => config.polling.timeout_secs = secs,
            Err(_) => warnings.push(ConfigWarning::InvalidEnvValue {
                var: "FUNCSYNC_POLL_TIMEOUT".to_string(),
                value,
            }),
        }
    }

    (config, warnings)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "default_project",
        "functions_dir",
        "repository_root",
        "key_file",
        "api_endpoint",
        "environments",
        "polling",
        "interval_secs",
        "timeout_secs",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
