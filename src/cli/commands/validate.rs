//! Validate configuration command.

use anyhow::Result;
use quantlab_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Data directory: {}", config.data.directory);
            println!("Default symbol: {}", config.strategy.default_symbol);
            println!(
                "Default window: {} to {}",
                config.strategy.default_start_date, config.strategy.default_end_date
            );
            println!(
                "Default periods: {}/{}",
                config.strategy.default_short_period, config.strategy.default_long_period
            );
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
