//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, DataSettings, LoggingConfig, StrategyDefaults};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from a TOML file plus `QUANTLAB_`-prefixed
/// environment overrides. The file is optional; defaults apply when it
/// is absent.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("QUANTLAB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
