// src/sweep/table.rs

//! One-dimensional volatility sweep.
//!
//! Holds strike and all market inputs fixed and prices the option at each point of
//! a volatility ladder, producing one `(vol, call, put)` row per point.

use super::MarketParameters;
use crate::models::bs::PriceResult;

/// Number of points on the fixed ladder (10% through 100%).
pub const FIXED_VOL_POINTS: usize = 10;

/// Spacing of the fixed ladder.
pub const FIXED_VOL_STEP: f64 = 0.10;

/// The fixed ladder `0.10, 0.20, ..., 1.00`.
///
/// Each point is `i * 0.10` rather than a running sum, so the values match the
/// literal decimals as closely as `f64` allows.
pub fn fixed_vol_ladder() -> Vec<f64> {
    (1..=FIXED_VOL_POINTS)
        .map(|i| i as f64 * FIXED_VOL_STEP)
        .collect()
}

/// One row of a [`SweepTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolRow {
    pub vol: f64,
    pub result: PriceResult,
}

/// Ordered `(vol, result)` rows, ascending by volatility.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepTable {
    rows: Vec<VolRow>,
}

impl SweepTable {
    pub fn rows(&self) -> &[VolRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Volatility column.
    pub fn vols(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.vol).collect()
    }

    /// Copy with call and put rounded for display. The vol column is left as is.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| VolRow {
                    vol: row.vol,
                    result: row.result.rounded(decimals),
                })
                .collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VolRow> {
        self.rows.iter()
    }
}

impl FromIterator<VolRow> for SweepTable {
    fn from_iter<I: IntoIterator<Item = VolRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SweepTable {
    type Item = &'a VolRow;
    type IntoIter = std::slice::Iter<'a, VolRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Price at each of the fixed vols `0.10..=1.00`.
///
/// Always returns exactly ten rows, whatever the other inputs are.
pub fn sweep_volatility(market: &MarketParameters, strike: f64) -> SweepTable {
    sweep_volatility_over(market, strike, &fixed_vol_ladder())
}

/// Price at each vol in `vols`, keeping their order.
pub fn sweep_volatility_over(market: &MarketParameters, strike: f64, vols: &[f64]) -> SweepTable {
    tracing::debug!(
        points = vols.len(),
        spot = market.spot,
        strike,
        "volatility sweep"
    );

    vols.iter()
        .map(|&vol| VolRow {
            vol,
            result: market.with(strike, vol).price(),
        })
        .collect()
}
