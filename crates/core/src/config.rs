use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::ReachoutPolicy;

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub logging: LoggingConfig,
    pub reachout: ReachoutPolicy,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
            reachout: ReachoutPolicy::default(),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl EngineConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected =
                options.config_path.unwrap_or_else(|| PathBuf::from("dealscope.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }

        if let Some(reachout) = patch.reachout {
            if let Some(stale_after_days) = reachout.stale_after_days {
                self.reachout.stale_after_days = stale_after_days;
            }
            if let Some(progress_floor) = reachout.progress_floor {
                self.reachout.progress_floor = progress_floor;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let log_level =
            read_env("DEALSCOPE_LOGGING_LEVEL").or_else(|| read_env("DEALSCOPE_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("DEALSCOPE_LOGGING_FORMAT").or_else(|| read_env("DEALSCOPE_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        if let Some(value) = read_env("DEALSCOPE_REACHOUT_STALE_AFTER_DAYS") {
            self.reachout.stale_after_days =
                parse_i64("DEALSCOPE_REACHOUT_STALE_AFTER_DAYS", &value)?;
        }
        if let Some(value) = read_env("DEALSCOPE_REACHOUT_PROGRESS_FLOOR") {
            self.reachout.progress_floor =
                parse_u8("DEALSCOPE_REACHOUT_PROGRESS_FLOOR", &value)?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(log_format) = overrides.log_format {
            self.logging.format = log_format;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_logging(&self.logging)?;
        validate_reachout(&self.reachout)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    if let Some(env_path) = read_env("DEALSCOPE_CONFIG").map(PathBuf::from) {
        return env_path.exists().then_some(env_path);
    }

    [PathBuf::from("dealscope.toml"), PathBuf::from("config/dealscope.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    toml::from_str::<ConfigPatch>(&raw)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn validate_reachout(reachout: &ReachoutPolicy) -> Result<(), ConfigError> {
    if reachout.stale_after_days < 1 || reachout.stale_after_days > 365 {
        return Err(ConfigError::Validation(
            "reachout.stale_after_days must be in range 1..=365".to_string(),
        ));
    }

    if reachout.progress_floor > 100 {
        return Err(ConfigError::Validation(
            "reachout.progress_floor must be at most 100".to_string(),
        ));
    }

    Ok(())
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_i64(key: &str, value: &str) -> Result<i64, ConfigError> {
    value.parse::<i64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u8(key: &str, value: &str) -> Result<u8, ConfigError> {
    value.parse::<u8>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    logging: Option<LoggingPatch>,
    reachout: Option<ReachoutPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

#[derive(Debug, Default, Deserialize)]
struct ReachoutPatch {
    stale_after_days: Option<i64>,
    progress_floor: Option<u8>,
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::io;
    use std::sync::{Mutex, OnceLock};

    use tempfile::TempDir;

    use super::{ConfigError, ConfigOverrides, EngineConfig, LoadOptions, LogFormat};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn clear_vars(vars: &[&str]) {
        for var in vars {
            env::remove_var(var);
        }
    }

    fn ensure(condition: bool, message: &'static str) -> Result<(), String> {
        if condition {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }

    #[test]
    fn defaults_are_valid() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let config = EngineConfig::load(LoadOptions::default())
            .map_err(|err| format!("config load failed: {err}"))?;

        ensure(config.logging.level == "info", "default log level should be info")?;
        ensure(
            matches!(config.logging.format, LogFormat::Compact),
            "default logging format should be compact",
        )?;
        ensure(config.reachout.stale_after_days == 14, "default staleness window is 14 days")?;
        ensure(config.reachout.progress_floor == 40, "default progress floor is 40")?;
        Ok(())
    }

    #[test]
    fn file_patch_applies_over_defaults() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
        let path = dir.path().join("dealscope.toml");
        fs::write(
            &path,
            r#"
[logging]
level = "warn"
format = "json"

[reachout]
stale_after_days = 21
"#,
        )
        .map_err(|err| err.to_string())?;

        let config =
            EngineConfig::load(LoadOptions { config_path: Some(path), ..LoadOptions::default() })
                .map_err(|err| format!("config load failed: {err}"))?;

        ensure(config.logging.level == "warn", "file log level should win over defaults")?;
        ensure(
            matches!(config.logging.format, LogFormat::Json),
            "file log format should win over defaults",
        )?;
        ensure(config.reachout.stale_after_days == 21, "file staleness window should apply")?;
        ensure(config.reachout.progress_floor == 40, "unset fields keep their defaults")?;
        Ok(())
    }

    #[test]
    fn precedence_defaults_file_env_overrides() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("DEALSCOPE_LOG_LEVEL", "error");

        let result = (|| -> Result<(), String> {
            let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
            let path = dir.path().join("dealscope.toml");
            fs::write(
                &path,
                r#"
[logging]
level = "warn"
"#,
            )
            .map_err(|err| err.to_string())?;

            let config = EngineConfig::load(LoadOptions {
                config_path: Some(path.clone()),
                ..LoadOptions::default()
            })
            .map_err(|err| format!("config load failed: {err}"))?;
            ensure(config.logging.level == "error", "env log level should win over file")?;

            let config = EngineConfig::load(LoadOptions {
                config_path: Some(path),
                overrides: ConfigOverrides {
                    log_level: Some("debug".to_string()),
                    ..ConfigOverrides::default()
                },
                ..LoadOptions::default()
            })
            .map_err(|err| format!("config load failed: {err}"))?;
            ensure(config.logging.level == "debug", "explicit override should win over env")?;
            Ok(())
        })();

        clear_vars(&["DEALSCOPE_LOG_LEVEL"]);
        result
    }

    #[test]
    fn missing_required_file_is_an_error() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
        let path = dir.path().join("absent.toml");

        let error = match EngineConfig::load(LoadOptions {
            config_path: Some(path),
            require_file: true,
            ..LoadOptions::default()
        }) {
            Ok(_) => return Err("expected missing-file failure but load succeeded".to_string()),
            Err(error) => error,
        };
        ensure(
            matches!(error, ConfigError::MissingConfigFile(_)),
            "missing required file should surface as MissingConfigFile",
        )
    }

    #[test]
    fn invalid_values_fail_validation() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("DEALSCOPE_LOG_LEVEL", "verbose");
        let result = (|| -> Result<(), String> {
            let error = match EngineConfig::load(LoadOptions::default()) {
                Ok(_) => {
                    return Err(
                        "expected validation failure but config load succeeded".to_string()
                    )
                }
                Err(error) => error,
            };
            let has_message = matches!(
                error,
                ConfigError::Validation(ref message) if message.contains("logging.level")
            );
            ensure(has_message, "validation failure should mention logging.level")
        })();
        clear_vars(&["DEALSCOPE_LOG_LEVEL"]);
        result?;

        env::set_var("DEALSCOPE_REACHOUT_STALE_AFTER_DAYS", "soon");
        let result = (|| -> Result<(), String> {
            let error = match EngineConfig::load(LoadOptions::default()) {
                Ok(_) => {
                    return Err("expected override failure but config load succeeded".to_string())
                }
                Err(error) => error,
            };
            ensure(
                matches!(error, ConfigError::InvalidEnvOverride { .. }),
                "non-numeric staleness window should surface as InvalidEnvOverride",
            )
        })();
        clear_vars(&["DEALSCOPE_REACHOUT_STALE_AFTER_DAYS"]);
        result
    }
}
