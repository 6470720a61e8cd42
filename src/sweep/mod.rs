//! Parameter sweeps over the Black-Scholes kernel.
//!
//! - [`table`]: a fixed volatility ladder at one strike
//! - [`grid`]: every (volatility, strike) pair of two axes
//!
//! Sweeps are pure: identical inputs give bit-identical outputs.

pub mod axis;
pub mod grid;
pub mod table;

pub use axis::{inclusive_range, SweepAxis};
pub use grid::{sweep_grid, SweepGrid, SweepMatrix};
pub use table::{fixed_vol_ladder, sweep_volatility, sweep_volatility_over, SweepTable, VolRow};

use crate::models::bs::OptionParameters;

/// Inputs held constant across a sweep: everything except strike and volatility.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarketParameters {
    /// Underlying spot price (S)
    pub spot: f64,
    /// Time to expiration in years (T)
    pub years_to_exp: f64,
    /// Risk-free rate as a decimal (r)
    pub rate: f64,
    /// Flat offset subtracted from call and put
    pub premium: f64,
}

impl Default for MarketParameters {
    fn default() -> Self {
        Self {
            spot: 50.0,
            years_to_exp: 1.0,
            rate: 0.02,
            premium: 2.5,
        }
    }
}

impl MarketParameters {
    /// Build from a rate quoted in percent, e.g. `2.0` for 2%.
    pub fn from_rate_pct(spot: f64, years_to_exp: f64, rate_pct: f64, premium: f64) -> Self {
        Self {
            spot,
            years_to_exp,
            rate: rate_pct / 100.0,
            premium,
        }
    }

    /// Complete the parameter set for one evaluation.
    pub fn with(&self, strike: f64, vol: f64) -> OptionParameters {
        OptionParameters {
            spot: self.spot,
            strike,
            years_to_exp: self.years_to_exp,
            rate: self.rate,
            vol,
            premium: self.premium,
        }
    }
}
