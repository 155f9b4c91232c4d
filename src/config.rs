//! Engine configuration.
//!
//! Layered, fail-open loading:
//! 1. Environment variables (highest priority, `SHELLMEND_*`)
//! 2. User config file (`~/.config/shellmend/config.toml`)
//! 3. Compiled defaults (lowest priority)
//!
//! A malformed config file is logged and ignored rather than failing the
//! run; the engine always starts with usable settings.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable prefix for all config options.
const ENV_PREFIX: &str = "SHELLMEND";

/// User config file name, under the platform config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Tunables for the correction engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Wall-clock budget for a diagnostic execution, in seconds.
    pub exec_timeout_secs: u64,

    /// Absolute edit-distance cutoff for the history fallback.
    pub history_max_distance: usize,

    /// Run the short-flag cluster decoder as a pipeline stage.
    ///
    /// Off by default: cluster expansion is an expand-for-review operation,
    /// not a silent rewrite.
    pub expand_short_flags: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exec_timeout_secs: 3,
            history_max_distance: crate::history::DEFAULT_MAX_DISTANCE,
            expand_short_flags: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the user config file and environment.
    #[must_use]
    pub fn load() -> Self {
        let mut config = user_config_path()
            .and_then(|p| Self::load_from_path(&p))
            .unwrap_or_default();
        config.apply_env_overrides();
        config
    }

    /// Load from an explicit file path. Returns `None` when the file is
    /// missing or malformed (malformed files are logged and skipped).
    #[must_use]
    pub fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
                None
            }
        }
    }

    /// The diagnostic execution budget as a [`Duration`].
    #[must_use]
    pub const fn exec_timeout(&self) -> Duration {
        Duration::from_secs(self.exec_timeout_secs)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse::<u64>("EXEC_TIMEOUT_SECS") {
            self.exec_timeout_secs = v;
        }
        if let Some(v) = env_parse::<usize>("HISTORY_MAX_DISTANCE") {
            self.history_max_distance = v;
        }
        if let Some(v) = env_parse::<bool>("EXPAND_SHORT_FLAGS") {
            self.expand_short_flags = v;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let full = format!("{ENV_PREFIX}_{key}");
    let raw = env::var(&full).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(var = full, value = raw, "ignoring unparsable env override");
            None
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("shellmend").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let c = EngineConfig::default();
        assert_eq!(c.exec_timeout_secs, 3);
        assert_eq!(c.history_max_distance, 5);
        assert!(!c.expand_short_flags);
        assert_eq!(c.exec_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "exec_timeout_secs = 10\nexpand_short_flags = true").unwrap();

        let c = EngineConfig::load_from_path(&path).unwrap();
        assert_eq!(c.exec_timeout_secs, 10);
        assert!(c.expand_short_flags);
        // Unset keys keep their defaults.
        assert_eq!(c.history_max_distance, 5);
    }

    #[test]
    fn malformed_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "exec_timeout_secs = [not toml").unwrap();
        assert!(EngineConfig::load_from_path(&path).is_none());
    }

    #[test]
    fn missing_file_is_skipped() {
        assert!(EngineConfig::load_from_path(Path::new("/no/such/file.toml")).is_none());
    }

    #[test]
    fn env_override_wins() {
        env::set_var("SHELLMEND_HISTORY_MAX_DISTANCE", "7");
        let mut c = EngineConfig::default();
        c.apply_env_overrides();
        env::remove_var("SHELLMEND_HISTORY_MAX_DISTANCE");
        assert_eq!(c.history_max_distance, 7);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let c = EngineConfig {
            exec_timeout_secs: 8,
            history_max_distance: 4,
            expand_short_flags: true,
        };
        let s = toml::to_string(&c).unwrap();
        let back: EngineConfig = toml::from_str(&s).unwrap();
        assert_eq!(c, back);
    }
}
