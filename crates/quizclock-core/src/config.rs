//! Quiz configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "quizclock.toml";

/// Settings for one quiz run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Path to the comma-separated problem file.
    #[serde(default = "default_problems")]
    pub problems: PathBuf,
    /// Time limit for the whole quiz, in seconds.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,
}

fn default_problems() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_time_limit() -> u64 {
    30
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            problems: default_problems(),
            time_limit_secs: default_time_limit(),
        }
    }
}

impl QuizConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, problems: Option<PathBuf>, time_limit_secs: Option<u64>) -> Self {
        if let Some(p) = problems {
            self.problems = p;
        }
        if let Some(t) = time_limit_secs {
            self.time_limit_secs = t;
        }
        self
    }
}

/// Load config from an explicit path, or `quizclock.toml` in the current
/// directory if present, or fall back to defaults.
///
/// Environment variable overrides: `QUIZCLOCK_PROBLEMS`, `QUIZCLOCK_TIME_LIMIT`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizConfig::default(),
    };

    apply_env_overrides(
        &mut config,
        std::env::var("QUIZCLOCK_PROBLEMS").ok(),
        std::env::var("QUIZCLOCK_TIME_LIMIT").ok(),
    )?;

    Ok(config)
}

/// Parse a TOML string into a `QuizConfig` (useful for testing).
pub fn parse_config_str(content: &str) -> Result<QuizConfig> {
    Ok(toml::from_str(content)?)
}

fn apply_env_overrides(
    config: &mut QuizConfig,
    problems: Option<String>,
    time_limit: Option<String>,
) -> Result<()> {
    if let Some(p) = problems {
        config.problems = PathBuf::from(p);
    }
    if let Some(t) = time_limit {
        config.time_limit_secs = t
            .trim()
            .parse()
            .with_context(|| format!("QUIZCLOCK_TIME_LIMIT is not a number of seconds: {t:?}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.problems, PathBuf::from("problems.csv"));
        assert_eq!(config.time_limit(), Duration::from_secs(30));
    }

    #[test]
    fn parse_full_config() {
        let config = parse_config_str(
            r#"
problems = "capitals.csv"
time_limit_secs = 90
"#,
        )
        .unwrap();
        assert_eq!(config.problems, PathBuf::from("capitals.csv"));
        assert_eq!(config.time_limit_secs, 90);
    }

    #[test]
    fn parse_partial_config_keeps_defaults() {
        let config = parse_config_str("time_limit_secs = 5\n").unwrap();
        assert_eq!(config.problems, PathBuf::from("problems.csv"));
        assert_eq!(config.time_limit_secs, 5);
    }

    #[test]
    fn parse_bad_config() {
        assert!(parse_config_str("time_limit_secs = \"soon\"").is_err());
    }

    #[test]
    fn overrides_win() {
        let config = QuizConfig::default().with_overrides(Some("other.csv".into()), Some(7));
        assert_eq!(config.problems, PathBuf::from("other.csv"));
        assert_eq!(config.time_limit_secs, 7);

        let config = QuizConfig::default().with_overrides(None, None);
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn env_overrides() {
        let mut config = QuizConfig::default();
        apply_env_overrides(&mut config, Some("env.csv".into()), Some(" 12 ".into())).unwrap();
        assert_eq!(config.problems, PathBuf::from("env.csv"));
        assert_eq!(config.time_limit_secs, 12);

        let err = apply_env_overrides(&mut config, None, Some("twelve".into())).unwrap_err();
        assert!(err.to_string().contains("QUIZCLOCK_TIME_LIMIT"));
    }

    #[test]
    fn explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "problems = \"math.csv\"\ntime_limit_secs = 15\n").unwrap();

        let config = load_config_from(Some(path.as_path())).unwrap();
        assert_eq!(config.problems, PathBuf::from("math.csv"));
    }
}
