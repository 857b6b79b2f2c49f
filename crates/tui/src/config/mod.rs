use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "error".to_string(),
            tick_rate_ms: 200,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tally", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override log level (logs go to stderr).
    #[arg(long)]
    log_level: Option<String>,
    /// Override event poll interval in milliseconds.
    #[arg(long)]
    tick_rate_ms: Option<u64>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("TALLY"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(tick_rate_ms) = args.tick_rate_ms {
        settings.tick_rate_ms = tick_rate_ms;
    }

    Ok(settings)
}
