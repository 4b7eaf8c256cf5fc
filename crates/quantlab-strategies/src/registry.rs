//! Closed registry of strategy variants.

use crate::MaCrossParams;
use quantlab_core::error::StrategyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of strategy variants the dispatcher recognizes.
///
/// Only the moving-average crossover is implemented; MACD and RSI are
/// recognized tags that render a placeholder instead of running the
/// pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    MaCross,
    Macd,
    Rsi,
}

impl StrategyKind {
    /// All recognized variants, in listing order.
    pub const ALL: [StrategyKind; 3] = [StrategyKind::MaCross, StrategyKind::Macd, StrategyKind::Rsi];

    /// The tag used on the dispatch boundary.
    pub fn tag(&self) -> &'static str {
        match self {
            StrategyKind::MaCross => "ma_cross",
            StrategyKind::Macd => "macd",
            StrategyKind::Rsi => "rsi",
        }
    }

    /// Display name for listings and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            StrategyKind::MaCross => "MA Crossover",
            StrategyKind::Macd => "MACD",
            StrategyKind::Rsi => "RSI",
        }
    }

    /// One-line description for the strategy listing.
    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::MaCross => {
                "dual moving-average crossover: long above, short below, flat until warm"
            }
            StrategyKind::Macd => "MACD momentum crossover (under development)",
            StrategyKind::Rsi => "RSI overbought/oversold reversal (under development)",
        }
    }

    /// Whether the variant runs the full pipeline.
    pub fn is_implemented(&self) -> bool {
        matches!(self, StrategyKind::MaCross)
    }

    /// Default parameters as JSON, for listings and request defaults.
    pub fn default_params(&self) -> serde_json::Value {
        match self {
            StrategyKind::MaCross => {
                serde_json::to_value(MaCrossParams::default()).unwrap_or(serde_json::Value::Null)
            }
            _ => serde_json::Value::Null,
        }
    }

    /// Comma-separated list of every supported tag.
    pub fn supported_tags() -> String {
        Self::ALL
            .iter()
            .map(|k| k.tag())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ma_cross" => Ok(StrategyKind::MaCross),
            "macd" => Ok(StrategyKind::Macd),
            "rsi" => Ok(StrategyKind::Rsi),
            other => Err(StrategyError::Unsupported {
                tag: other.to_string(),
                supported: Self::supported_tags(),
            }),
        }
    }
}

/// Catalog entry for one strategy variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInfo {
    pub tag: String,
    pub name: String,
    pub description: String,
    pub implemented: bool,
    pub default_params: serde_json::Value,
}

impl StrategyInfo {
    /// Build the catalog of every recognized variant.
    pub fn catalog() -> Vec<StrategyInfo> {
        StrategyKind::ALL
            .iter()
            .map(|kind| StrategyInfo {
                tag: kind.tag().to_string(),
                name: kind.display_name().to_string(),
                description: kind.description().to_string(),
                implemented: kind.is_implemented(),
                default_params: kind.default_params(),
            })
            .collect()
    }
}
