use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("не удалось прочитать config: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("некорректный JSON: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{var}: ожидается true/false, получено {value:?}")]
    InvalidBool { var: String, value: String },
    #[error("некорректный фильтр логов: {directives}")]
    Filter {
        directives: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(alias = "LOG_LEVEL", default = "default_log_level")]
    pub log_level: String,
    #[serde(alias = "COLORIZE", default = "default_true")]
    pub colorize: bool,
    #[serde(alias = "TIMESTAMP", default = "default_true")]
    pub timestamp: bool,
    #[serde(alias = "TARGET", default = "default_true")]
    pub target: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            colorize: true,
            timestamp: true,
            target: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Apply process environment on top of file values.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Env overrides: LOG_LEVEL (then RUST_LOG), NO_COLOR, LOG_TIMESTAMP.
    pub fn with_env_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(level) = non_blank("LOG_LEVEL").or_else(|| non_blank("RUST_LOG")) {
            self.log_level = level;
        }
        // https://no-color.org: any non-empty value disables color
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.colorize = false;
        }
        if let Some(raw) = lookup("LOG_TIMESTAMP") {
            self.timestamp = parse_bool("LOG_TIMESTAMP", &raw)?;
        }
        Ok(self)
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var: var.to_string(),
            value: raw.to_string(),
        }),
    }
}

pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.into(),
        source,
    })?;
    Config::from_json_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.into(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_json_uses_defaults() {
        let cfg = Config::from_json_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.colorize && cfg.timestamp && cfg.target);
    }

    #[test]
    fn accepts_upper_case_aliases() {
        let cfg =
            Config::from_json_str(r#"{"LOG_LEVEL":"debug,hyper=warn","COLORIZE":false}"#).unwrap();
        assert_eq!(cfg.log_level, "debug,hyper=warn");
        assert!(!cfg.colorize);
        assert!(cfg.timestamp);
    }

    #[test]
    fn env_overrides_file_values() {
        let cfg = Config::default()
            .with_env_from(env(&[
                ("RUST_LOG", "trace"),
                ("NO_COLOR", "1"),
                ("LOG_TIMESTAMP", "off"),
            ]))
            .unwrap();
        assert_eq!(cfg.log_level, "trace");
        assert!(!cfg.colorize);
        assert!(!cfg.timestamp);
    }

    #[test]
    fn log_level_wins_over_rust_log() {
        let cfg = Config::default()
            .with_env_from(env(&[("LOG_LEVEL", "warn"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn blank_log_level_falls_back_to_rust_log() {
        let cfg = Config::default()
            .with_env_from(env(&[("LOG_LEVEL", ""), ("RUST_LOG", "debug")]))
            .unwrap();
        assert_eq!(cfg.log_level, "debug");

        let cfg = Config::default()
            .with_env_from(env(&[("LOG_LEVEL", "  "), ("RUST_LOG", "")]))
            .unwrap();
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn empty_no_color_keeps_colors() {
        let cfg = Config::default()
            .with_env_from(env(&[("NO_COLOR", "")]))
            .unwrap();
        assert!(cfg.colorize);
    }

    #[test]
    fn rejects_invalid_bool() {
        let err = Config::default()
            .with_env_from(env(&[("LOG_TIMESTAMP", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { ref var, .. } if var == "LOG_TIMESTAMP"));
    }

    #[test]
    fn loads_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_level":"warn","timestamp":false}}"#).unwrap();
        let cfg = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.log_level, "warn");
        assert!(!cfg.timestamp);
        assert!(cfg.colorize);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ log_level: warn").unwrap();
        let err = load_config(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_config("/nonexistent/highlight.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
