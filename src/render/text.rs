// src/render/text.rs

//! Plain-text layouts for terminals and logs.

use crate::models::bs::round_to;
use crate::sweep::{MarketParameters, SweepMatrix, SweepTable};
use std::fmt::Write;

const VOL_WIDTH: usize = 12;
const PNL_WIDTH: usize = 15;
const RULE_WIDTH: usize = 42;

/// Summary of the inputs behind a volatility table, one field per line.
pub fn format_inputs(market: &MarketParameters, strike: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Premium: {}", market.premium);
    let _ = writeln!(out, "Underlying Price (S): {}", market.spot);
    let _ = writeln!(out, "Strike Price (K): {}", strike);
    let _ = writeln!(out, "Time to Expiration (T in years): {}", market.years_to_exp);
    let _ = writeln!(out, "Risk-Free Rate (r): {:.2}%", market.rate * 100.0);
    out
}

/// The volatility / call / put table.
///
/// ```text
/// Volatility  Call P&L       Put P&L
/// ==========================================
/// 0.10        -2.50          1.41
/// ```
///
/// Values are rounded to `decimals` places; `NaN` and infinities print as is.
pub fn format_vol_table(table: &SweepTable, decimals: u32) -> String {
    let d = decimals as usize;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<vw$}{:<pw$}{:<pw$}",
        "Volatility",
        "Call P&L",
        "Put P&L",
        vw = VOL_WIDTH,
        pw = PNL_WIDTH
    );
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    for row in table {
        let _ = writeln!(
            out,
            "{:<vw$.2}{:<pw$.d$}{:<pw$.d$}",
            row.vol,
            round_to(row.result.call, decimals),
            round_to(row.result.put, decimals),
            vw = VOL_WIDTH,
            pw = PNL_WIDTH,
            d = d
        );
    }
    out
}

/// Aligned grid with vol labels down the side and strike labels across the top.
///
/// Rows are printed highest volatility first so the layout reads like a heatmap.
/// An empty matrix renders as an empty string.
pub fn format_matrix(matrix: &SweepMatrix, decimals: u32) -> String {
    if matrix.is_empty() {
        return String::new();
    }
    let d = decimals as usize;
    let row_labels = matrix.row_labels();
    let col_labels = matrix.col_labels();

    let cells: Vec<Vec<String>> = matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| format!("{:.d$}", round_to(*v, decimals), d = d))
                .collect()
        })
        .collect();

    let label_width = row_labels.iter().map(|l| l.len()).max().unwrap_or(0).max(4);
    let cell_width = cells
        .iter()
        .flatten()
        .chain(col_labels.iter())
        .map(|c| c.len())
        .max()
        .unwrap_or(0)
        + 1;

    let mut out = String::new();
    let _ = write!(out, "{:>lw$} |", matrix.kind.as_str(), lw = label_width);
    for label in &col_labels {
        let _ = write!(out, "{:>cw$}", label, cw = cell_width);
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "{}-+{}",
        "-".repeat(label_width),
        "-".repeat(cell_width * col_labels.len())
    );
    for (label, row) in row_labels.iter().zip(cells.iter()).rev() {
        let _ = write!(out, "{:>lw$} |", label, lw = label_width);
        for cell in row {
            let _ = write!(out, "{:>cw$}", cell, cw = cell_width);
        }
        out.push('\n');
    }
    out
}
