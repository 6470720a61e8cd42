// src/sweep/grid.rs

//! Two-dimensional volatility x strike sweep.
//!
//! Rows run over volatility and columns over strike, both ascending.  Call and
//! put are computed in the same pass and returned as two matrices sharing axes.

use super::{MarketParameters, SweepAxis};
use crate::models::bs::{PnlKind, PriceResult};

/// One P&L side laid out as `values[row = vol][col = strike]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepMatrix {
    pub kind: PnlKind,
    /// Row axis as decimals, e.g. 0.25
    pub vol_values: Vec<f64>,
    /// Column axis
    pub strike_values: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

impl SweepMatrix {
    pub fn n_rows(&self) -> usize {
        self.vol_values.len()
    }

    pub fn n_cols(&self) -> usize {
        self.strike_values.len()
    }

    /// True when either axis has no points.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0 || self.n_cols() == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Volatility labels as whole percentages, e.g. `"25%"`.
    pub fn row_labels(&self) -> Vec<String> {
        self.vol_values
            .iter()
            .map(|v| format!("{:.0}%", v * 100.0))
            .collect()
    }

    /// Strike labels as the raw number, e.g. `"40"` or `"42.5"`.
    pub fn col_labels(&self) -> Vec<String> {
        self.strike_values.iter().map(|k| format!("{}", k)).collect()
    }

    /// Smallest and largest finite cell, or `None` if no cell is finite.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Call and put matrices from one grid sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepGrid {
    pub call: SweepMatrix,
    pub put: SweepMatrix,
}

impl SweepGrid {
    pub fn matrix(&self, kind: PnlKind) -> &SweepMatrix {
        match kind {
            PnlKind::Call => &self.call,
            PnlKind::Put => &self.put,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.call.is_empty()
    }
}

/// Price every `(vol, strike)` pair.
///
/// `vol_axis_pct` is given in percent (e.g. `10..=100 step 10`) and converted to
/// decimals point by point; `k_axis` is used as is.  Both axes follow the
/// inclusive-stop rule of [`super::inclusive_range`].  A degenerate axis produces
/// an empty matrix rather than an error.
pub fn sweep_grid(
    market: &MarketParameters,
    k_axis: &SweepAxis,
    vol_axis_pct: &SweepAxis,
) -> SweepGrid {
    let strike_values = k_axis.values();
    let vol_values: Vec<f64> = vol_axis_pct.values().iter().map(|p| p / 100.0).collect();

    if strike_values.is_empty() || vol_values.is_empty() {
        tracing::warn!(
            ?k_axis,
            ?vol_axis_pct,
            strikes = strike_values.len(),
            vols = vol_values.len(),
            "degenerate sweep axis, grid is empty"
        );
    } else {
        tracing::debug!(
            rows = vol_values.len(),
            cols = strike_values.len(),
            "grid sweep"
        );
    }

    let priced: Vec<Vec<PriceResult>> = vol_values
        .iter()
        .map(|&vol| {
            strike_values
                .iter()
                .map(|&strike| market.with(strike, vol).price())
                .collect()
        })
        .collect();

    let split = |kind: PnlKind| SweepMatrix {
        kind,
        vol_values: vol_values.clone(),
        strike_values: strike_values.clone(),
        values: priced
            .iter()
            .map(|row| row.iter().map(|r| r.pnl(kind)).collect())
            .collect(),
    };

    SweepGrid {
        call: split(PnlKind::Call),
        put: split(PnlKind::Put),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> SweepGrid {
        sweep_grid(
            &MarketParameters::default(),
            &SweepAxis::new(50.0, 60.0, 5.0),
            &SweepAxis::new(20.0, 40.0, 20.0),
        )
    }

    #[test]
    fn cells_match_direct_pricing() {
        let market = MarketParameters::default();
        let grid = small_grid();
        assert_eq!(grid.call.n_rows(), 2);
        assert_eq!(grid.call.n_cols(), 3);

        let direct = market.with(55.0, 0.4).price();
        assert_eq!(grid.call.get(1, 1), Some(direct.call));
        assert_eq!(grid.put.get(1, 1), Some(direct.put));
    }

    #[test]
    fn labels_follow_axes() {
        let grid = small_grid();
        assert_eq!(grid.put.row_labels(), vec!["20%", "40%"]);
        assert_eq!(grid.put.col_labels(), vec!["50", "55", "60"]);
    }

    #[test]
    fn finite_range_skips_nan() {
        let m = SweepMatrix {
            kind: PnlKind::Call,
            vol_values: vec![0.1],
            strike_values: vec![1.0, 2.0, 3.0],
            values: vec![vec![f64::NAN, -1.0, 4.0]],
        };
        assert_eq!(m.finite_range(), Some((-1.0, 4.0)));
        assert_eq!(m.get(0, 5), None);
    }
}
