use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use resources::config::CliConfig;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/smctl/config.yaml";
pub const ENV_PREFIX: &str = "SMCTL";

/// Load the CLI config.
///
/// An explicit `path` must exist, the default one is optional.
/// `SMCTL_*` environment variables override values from the file.
pub fn load(path: Option<&Path>) -> Result<CliConfig> {
    let file = match path {
        Some(path) => File::from(path),
        None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
    };
    Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()
        .with_context(|| "Failed to read config".to_string())?
        .try_deserialize::<CliConfig>()
        .with_context(|| "Failed to parse config".to_string())
}
