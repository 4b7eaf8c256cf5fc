//! List strategies command.

use anyhow::Result;
use quantlab_strategies::{StrategyInfo, StrategyKind};

pub async fn run() -> Result<()> {
    println!("Available Strategies");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for info in StrategyInfo::catalog() {
        let status = if info.implemented {
            "implemented"
        } else {
            "under development"
        };
        println!("  {} ({}) [{}]", info.name, info.tag, status);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", info.description);
        if !info.default_params.is_null() {
            println!("  defaults: {}", info.default_params);
        }
        println!();
    }

    println!("Use --strategy <tag> to select a strategy.");
    println!("Strategy tags: {}", StrategyKind::supported_tags());

    Ok(())
}
