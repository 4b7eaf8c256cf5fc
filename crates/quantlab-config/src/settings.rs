//! Configuration structures.

use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub strategy: StrategyDefaults,
    #[serde(default)]
    pub data: DataSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "quantlab".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// Optional log file written alongside console output
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Default backtest inputs used when the CLI omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyDefaults {
    pub default_symbol: String,
    pub default_start_date: String,
    pub default_end_date: String,
    pub default_short_period: usize,
    pub default_long_period: usize,
}

impl Default for StrategyDefaults {
    fn default() -> Self {
        Self {
            default_symbol: "000001.SZ".to_string(),
            default_start_date: "20240101".to_string(),
            default_end_date: "20241201".to_string(),
            default_short_period: 5,
            default_long_period: 20,
        }
    }
}

/// Market data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Directory of per-symbol CSV files
    pub directory: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            directory: "data".to_string(),
        }
    }
}
