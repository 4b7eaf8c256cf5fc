//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quantlab")]
#[command(author, version, about = "A-share strategy backtesting and performance analytics")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configuration file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a strategy backtest
    Backtest(BacktestArgs),
    /// List available strategies
    Strategies,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct BacktestArgs {
    /// Strategy tag (ma_cross, macd, rsi)
    #[arg(short = 't', long, default_value = "ma_cross")]
    pub strategy: String,

    /// Exchange-qualified symbol (e.g. 000001.SZ); config default when omitted
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Start date (YYYYMMDD); config default when omitted
    #[arg(long)]
    pub start: Option<String>,

    /// End date (YYYYMMDD); config default when omitted
    #[arg(long)]
    pub end: Option<String>,

    /// Short moving-average period; config default when omitted
    #[arg(long)]
    pub short_period: Option<usize>,

    /// Long moving-average period; config default when omitted
    #[arg(long)]
    pub long_period: Option<usize>,

    /// Directory of per-symbol CSV files; config default when omitted
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save the report to a file
    #[arg(long)]
    pub save: Option<PathBuf>,
}
