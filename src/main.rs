mod config;
mod logging;

use anyhow::{Context, Result};
use level_highlight::{resolve_name, Level};
use tracing::{debug, error, info, trace, warn};

use crate::config::{load_config, Config};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Parse CLI args: --config <path>, the rest are level names to preview
    let mut config_path: Option<String> = None;
    let mut names = Vec::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if let Some(rest) = arg.strip_prefix("--config=") {
            config_path = Some(rest.to_string());
        } else if arg == "--config" {
            config_path = Some(args.next().context("--config requires a path")?);
        } else {
            names.push(arg);
        }
    }

    let config = match config_path.as_deref() {
        Some(path) => load_config(path).context("failed to load config")?,
        None => Config::default(),
    };
    let config = config.with_env().context("invalid environment")?;
    logging::init_logging(&config).context("failed to init logging")?;

    info!(
        log_level = %config.log_level,
        colorize = config.colorize,
        "Logging initialized"
    );

    if names.is_empty() {
        emit_samples();
    } else {
        for name in &names {
            let code = resolve_name(name);
            let shown = if config.colorize {
                code.paint(name)
            } else {
                name.clone()
            };
            println!("{shown} -> {}", code.as_str());
        }
    }

    Ok(())
}

fn emit_samples() {
    for level in Level::ALL {
        match level {
            Level::Trace => trace!(code = level.code(), "cyan"),
            Level::Debug => debug!(code = level.code(), "blue"),
            Level::Info => info!(code = level.code(), "green"),
            Level::Warn => warn!(code = level.code(), "red"),
            Level::Error => error!(code = level.code(), "bold red"),
        }
    }
}
