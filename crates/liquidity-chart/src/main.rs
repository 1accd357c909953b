use std::path::Path;

use anyhow::Context;
use clap::Parser;

use liquidity_chart::{build_report, ChartConfig, ChartInput};

#[derive(Parser, Debug)]
#[command(name = "liquidity-chart")]
#[command(about = "Liquidity depth bars and position sizing for a concentrated-liquidity pool")]
struct Args {
    /// Path to chart configuration file
    #[arg(short, long, default_value = "chart.toml")]
    config: String,

    /// Pool snapshot and tick set (JSON)
    #[arg(short, long)]
    input: String,

    /// Emit bars in ascending tick order
    #[arg(long)]
    inverted: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or(if args.verbose { "debug" } else { "info" })
    ).init();

    // Load configuration
    let mut config = if Path::new(&args.config).exists() {
        ChartConfig::load(&args.config)
            .with_context(|| format!("loading config {}", args.config))?
    } else {
        log::warn!("Config file {} not found, using defaults", args.config);
        ChartConfig::default()
    };
    config.inverted |= args.inverted;

    let input = ChartInput::load(&args.input)
        .with_context(|| format!("loading input {}", args.input))?;

    log::info!(
        "Loaded pool at tick {} (spacing {}) with {} initialized ticks",
        input.pool.tick_current,
        input.pool.tick_spacing,
        input.ticks.len()
    );

    let report = build_report(&input, &config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
