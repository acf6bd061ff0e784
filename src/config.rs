//! Runtime configuration read from the environment.
//!
//! `main.rs` loads a `.env` file with `dotenv` first, so every key below can
//! live there as well.

use crate::models::MaskCheck;
use std::path::PathBuf;

pub const ENV_LOG_CONFIG: &str = "SUBNET_PLANNER_LOG_CONFIG";
pub const ENV_FULL_BINARY: &str = "SUBNET_PLANNER_FULL_BINARY";
pub const ENV_MASK_CHECK: &str = "SUBNET_PLANNER_MASK_CHECK";
pub const ENV_FORMAT: &str = "SUBNET_PLANNER_FORMAT";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How the plan report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file.
    pub log_config: PathBuf,
    /// Print binary views of every address.
    pub full_binary: bool,
    pub mask_check: MaskCheck,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            full_binary: false,
            mask_check: MaskCheck::Strict,
            format: OutputFormat::Csv,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unknown values fall back to the default with a warning.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }
        if let Some(value) = lookup(ENV_FULL_BINARY) {
            match parse_flag(&value) {
                Some(flag) => config.full_binary = flag,
                None => log::warn!("Ignoring {ENV_FULL_BINARY}={value}"),
            }
        }
        if let Some(value) = lookup(ENV_MASK_CHECK) {
            match value.trim().to_lowercase().as_str() {
                "strict" => config.mask_check = MaskCheck::Strict,
                "permissive" => config.mask_check = MaskCheck::Permissive,
                _ => log::warn!("Ignoring {ENV_MASK_CHECK}={value}"),
            }
        }
        if let Some(value) = lookup(ENV_FORMAT) {
            match value.trim().to_lowercase().as_str() {
                "csv" => config.format = OutputFormat::Csv,
                "json" => config.format = OutputFormat::Json,
                _ => log::warn!("Ignoring {ENV_FORMAT}={value}"),
            }
        }
        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
