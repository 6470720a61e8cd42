// Example: heatmap.rs
// Sweeps volatility x strike and writes call/put P&L heatmaps.
//
// Usage:
//     cargo run --example heatmap -- [config.toml] [out_dir]
//
// Without a config file the desktop defaults are used.  Outputs, written to
// out_dir (default: current directory):
//     call_pnl.svg, put_pnl.svg, call_pnl.csv, put_pnl.csv

use std::env;
use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bs_heatmap::render::{format_matrix, plot_heatmap_svg, write_matrix_csv};
use bs_heatmap::{PnlKind, SweepConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => SweepConfig::from_file(path)?,
        None => SweepConfig::desktop(),
    };
    let out_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("."));

    config.validate()?;
    tracing::info!(
        spot = config.market.spot,
        years = config.market.years_to_exp,
        rate = config.market.rate,
        premium = config.market.premium,
        "sweeping grid"
    );

    let grid = config.run_grid();
    if grid.is_empty() {
        println!("Grid is empty, check the axis ranges.");
        return Ok(());
    }

    for kind in [PnlKind::Call, PnlKind::Put] {
        let matrix = grid.matrix(kind);
        let title = match kind {
            PnlKind::Call => "Call P&L Heatmap",
            PnlKind::Put => "Put P&L Heatmap",
        };

        println!("\n{}", title);
        print!("{}", format_matrix(matrix, config.display_decimals));

        let svg_path = out_dir.join(format!("{}_pnl.svg", kind));
        plot_heatmap_svg(matrix, &svg_path, title)?;

        let csv_path = out_dir.join(format!("{}_pnl.csv", kind));
        let file = File::create(&csv_path)
            .with_context(|| format!("failed to create {}", csv_path.display()))?;
        write_matrix_csv(matrix, file)?;

        println!("Saved {} and {}", svg_path.display(), csv_path.display());
    }
    Ok(())
}
