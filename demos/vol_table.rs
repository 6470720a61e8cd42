// Example: vol_table.rs
// Prints the volatility table of the desktop results window for a set of inputs.
//
// Usage:
//     cargo run --example vol_table -- [premium] [spot] [strike] [years] [rate_pct]
//
// Missing arguments fall back to the desktop form defaults
// (premium 2.5, S=50, K=55, T=1, r=2%).  The rate is given in percent.

use std::env;

use anyhow::{anyhow, Context, Result};
use bs_heatmap::render::{format_inputs, format_vol_table};
use bs_heatmap::{sweep_volatility, MarketParameters, SweepConfig};

fn parse_arg(args: &[String], idx: usize, name: &str, default: f64) -> Result<f64> {
    match args.get(idx) {
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("{} must be a number, got '{}'", name, raw)),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let defaults = SweepConfig::desktop();
    let args: Vec<String> = env::args().collect();

    let premium = parse_arg(&args, 1, "premium", defaults.market.premium)?;
    let spot = parse_arg(&args, 2, "spot", defaults.market.spot)?;
    let strike = parse_arg(&args, 3, "strike", defaults.strike)?;
    let years = parse_arg(&args, 4, "years", defaults.market.years_to_exp)?;
    let rate_pct = parse_arg(&args, 5, "rate_pct", defaults.market.rate * 100.0)?;

    let market = MarketParameters::from_rate_pct(spot, years, rate_pct, premium);

    // The table is computed either way; validation only decides whether we warn
    if let Err(e) = market.with(strike, 0.10).validate() {
        tracing::warn!("inputs outside the model domain, results may be NaN: {:#}", e);
    }

    let table = sweep_volatility(&market, strike);
    if table.is_empty() {
        return Err(anyhow!("volatility table is empty"));
    }

    println!("Black-Scholes Results");
    println!("=====================");
    print!("{}", format_inputs(&market, strike));
    println!();
    print!("{}", format_vol_table(&table, defaults.display_decimals));
    Ok(())
}
