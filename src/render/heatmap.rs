// src/render/heatmap.rs

//! SVG heatmap of a sweep matrix.
//!
//! One cell per (vol, strike) pair, coloured on a diverging scale: losses shade
//! towards red, gains towards green and break-even stays white.  The scale is
//! symmetric around zero so equal magnitudes get equal intensity.

use crate::sweep::SweepMatrix;
use anyhow::{anyhow, Result};
use plotters::prelude::*;
use std::path::Path;

const CELL_PX: u32 = 64;
const MARGIN_PX: u32 = 140;

/// Map `value` onto red / white / green given the largest absolute value.
/// Non-finite values are drawn grey.
pub fn pnl_color(value: f64, max_abs: f64) -> RGBColor {
    if !value.is_finite() {
        return RGBColor(160, 160, 160);
    }
    if max_abs <= 0.0 || !max_abs.is_finite() {
        return WHITE;
    }
    let t = (value / max_abs).clamp(-1.0, 1.0);
    let fade = |full: u8, frac: f64| (255.0 - (255.0 - full as f64) * frac).round() as u8;
    if t < 0.0 {
        let f = -t;
        RGBColor(fade(215, f), fade(48, f), fade(39, f))
    } else {
        RGBColor(fade(26, t), fade(152, t), fade(80, t))
    }
}

/// Chart range for `n` unit cells centred on `0, 1, ..., n - 1`.
fn cell_span(n: usize) -> std::ops::Range<f64> {
    -0.5..n as f64 - 0.5
}

/// Tick label at chart coordinate `x`: the label of the cell centred there, or
/// blank for ticks between cells and past either end.
fn axis_label(labels: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// Draw `matrix` to an SVG file at `path`.
///
/// Rows run bottom to top in ascending volatility and columns left to right in
/// ascending strike.  Each cell is annotated with its value to two decimals.
/// An empty matrix is skipped without creating a file.
pub fn plot_heatmap_svg(matrix: &SweepMatrix, path: impl AsRef<Path>, title: &str) -> Result<()> {
    let path = path.as_ref();
    if matrix.is_empty() {
        tracing::warn!(path = %path.display(), "empty matrix, heatmap not written");
        return Ok(());
    }

    let n_rows = matrix.n_rows();
    let n_cols = matrix.n_cols();
    let row_labels = matrix.row_labels();
    let col_labels = matrix.col_labels();
    let max_abs = matrix
        .finite_range()
        .map(|(lo, hi)| lo.abs().max(hi.abs()))
        .unwrap_or(0.0);

    let size = (
        n_cols as u32 * CELL_PX + MARGIN_PX,
        n_rows as u32 * CELL_PX + MARGIN_PX,
    );
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("heatmap fill: {}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(title, ("sans-serif", 22))
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(cell_span(n_cols), cell_span(n_rows))
        .map_err(|e| anyhow!("heatmap chart: {}", e))?;

    let col_label_at = |x: &f64| axis_label(&col_labels, *x);
    let row_label_at = |y: &f64| axis_label(&row_labels, *y);

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n_cols)
        .y_labels(n_rows)
        .x_label_formatter(&col_label_at)
        .y_label_formatter(&row_label_at)
        .x_desc("Strike")
        .y_desc("Volatility")
        .draw()
        .map_err(|e| anyhow!("heatmap mesh: {}", e))?;

    chart
        .draw_series((0..n_rows).flat_map(|r| {
            (0..n_cols).map(move |c| {
                let value = matrix.get(r, c).unwrap_or(f64::NAN);
                Rectangle::new(
                    [
                        (c as f64 - 0.5, r as f64 - 0.5),
                        (c as f64 + 0.5, r as f64 + 0.5),
                    ],
                    pnl_color(value, max_abs).filled(),
                )
            })
        }))
        .map_err(|e| anyhow!("heatmap cells: {}", e))?;

    chart
        .draw_series((0..n_rows).flat_map(|r| {
            (0..n_cols).map(move |c| {
                let value = matrix.get(r, c).unwrap_or(f64::NAN);
                Text::new(
                    format!("{:.2}", value),
                    (c as f64 - 0.3, r as f64 + 0.1),
                    ("sans-serif", 12).into_font(),
                )
            })
        }))
        .map_err(|e| anyhow!("heatmap labels: {}", e))?;

    root.present()
        .map_err(|e| anyhow!("failed to write heatmap {}: {}", path.display(), e))?;
    tracing::info!(path = %path.display(), rows = n_rows, cols = n_cols, "heatmap written");
    Ok(())
}
