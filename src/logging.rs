use anyhow::{anyhow, Result};
use level_highlight::HighlightFormat;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ConfigError};

pub fn env_filter(cfg: &Config) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(&cfg.log_level).map_err(|source| ConfigError::Filter {
        directives: cfg.log_level.clone(),
        source,
    })
}

pub fn event_format(cfg: &Config) -> HighlightFormat {
    HighlightFormat::new()
        .with_ansi(cfg.colorize)
        .with_timestamp(cfg.timestamp)
        .with_target(cfg.target)
}

/// Install the global subscriber with level highlighting.
pub fn init_logging(cfg: &Config) -> Result<()> {
    let filter = env_filter(cfg)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(cfg.colorize)
        .event_format(event_format(cfg))
        .try_init()
        .map_err(|err| anyhow!(err).context("logging already initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_filter_from_directives() {
        let cfg = Config {
            log_level: "debug,hyper=warn".to_string(),
            ..Config::default()
        };
        assert!(env_filter(&cfg).is_ok());
    }

    #[test]
    fn invalid_directives_are_rejected() {
        let cfg = Config {
            log_level: "app=notalevel".to_string(),
            ..Config::default()
        };
        let err = env_filter(&cfg).unwrap_err();
        assert!(matches!(err, ConfigError::Filter { .. }));
    }

    #[test]
    fn second_init_fails_without_panic() {
        let cfg = Config::default();
        let _ = init_logging(&cfg);
        assert!(init_logging(&cfg).is_err());
    }
}
