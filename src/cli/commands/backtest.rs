//! Backtest command implementation.

use anyhow::{Context, Result};
use quantlab_backtest::{BacktestEngine, BacktestOutcome, BacktestRequest};
use quantlab_config::AppConfig;
use quantlab_core::traits::MarketData;
use quantlab_data::CsvMarketData;
use std::sync::Arc;
use tracing::{info, warn};

use crate::cli::BacktestArgs;

pub async fn run(args: BacktestArgs, config: &AppConfig) -> Result<()> {
    let defaults = &config.strategy;
    let request = BacktestRequest {
        strategy_type: args.strategy.clone(),
        symbol: args
            .symbol
            .clone()
            .unwrap_or_else(|| defaults.default_symbol.clone()),
        start_date: args
            .start
            .clone()
            .unwrap_or_else(|| defaults.default_start_date.clone()),
        end_date: args
            .end
            .clone()
            .unwrap_or_else(|| defaults.default_end_date.clone()),
        params: serde_json::json!({
            "short_period": args.short_period.unwrap_or(defaults.default_short_period),
            "long_period": args.long_period.unwrap_or(defaults.default_long_period),
        }),
    };

    info!(
        strategy = %request.strategy_type,
        symbol = %request.symbol,
        "starting backtest"
    );

    let data_dir = args
        .data
        .clone()
        .unwrap_or_else(|| config.data.directory.clone().into());
    let provider = CsvMarketData::new(data_dir);
    match provider.connect().await {
        Ok(()) => info!("market data provider connected"),
        Err(e) => warn!(error = %e, "market data provider connection failed"),
    }

    let engine = BacktestEngine::new(Arc::new(provider));

    let rendered = match args.output.as_str() {
        "json" => match engine.execute(&request).await {
            Ok(BacktestOutcome::Report(report)) => report.to_json()?,
            Ok(BacktestOutcome::NotImplemented(text)) => text,
            Err(e) => anyhow::bail!("backtest failed: {e}"),
        },
        _ => engine.run_backtest(&request).await,
    };

    println!("{}", rendered);

    if let Some(save_path) = &args.save {
        std::fs::write(save_path, &rendered)
            .with_context(|| format!("failed to save report to {}", save_path.display()))?;
        info!("report saved to {:?}", save_path);
    }

    Ok(())
}
