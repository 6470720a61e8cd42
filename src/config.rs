//! Sweep configuration: base inputs plus the two sweep axes, loadable from TOML.
//!
//! Every field has a serde default so a config file only needs to name what it
//! changes.  Missing sections fall back to the desktop-form defaults.

use crate::models::bs::OptionParameters;
use crate::sweep::table::FIXED_VOL_STEP;
use crate::sweep::{
    sweep_grid, sweep_volatility, MarketParameters, SweepAxis, SweepGrid, SweepTable,
};
use anyhow::{Context, Result};
#[cfg(feature = "serde")]
use std::path::Path;

/// Inputs for both the volatility table and the heatmap grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SweepConfig {
    /// Spot, expiry, rate and premium
    #[cfg_attr(feature = "serde", serde(default))]
    pub market: MarketParameters,

    /// Strike used by the one-dimensional volatility table
    #[cfg_attr(feature = "serde", serde(default = "default_strike"))]
    pub strike: f64,

    /// Strike axis of the heatmap
    #[cfg_attr(feature = "serde", serde(default = "default_strike_axis"))]
    pub strike_axis: SweepAxis,

    /// Volatility axis of the heatmap, in percent
    #[cfg_attr(feature = "serde", serde(default = "default_vol_axis_pct"))]
    pub vol_axis_pct: SweepAxis,

    /// Decimal places used when rendering P&L values
    #[cfg_attr(feature = "serde", serde(default = "default_display_decimals"))]
    pub display_decimals: u32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            market: MarketParameters::default(),
            strike: default_strike(),
            strike_axis: default_strike_axis(),
            vol_axis_pct: default_vol_axis_pct(),
            display_decimals: default_display_decimals(),
        }
    }
}

impl SweepConfig {
    /// The desktop form's starting values
    pub fn desktop() -> Self {
        Self::default()
    }

    /// Denser grid: 5% vol steps and 2.5 strike steps
    pub fn fine() -> Self {
        Self {
            strike_axis: SweepAxis::new(40.0, 70.0, 2.5),
            vol_axis_pct: SweepAxis::new(5.0, 100.0, 5.0),
            ..Self::default()
        }
    }

    /// Quick look: 20% vol steps and 10 strike steps
    pub fn coarse() -> Self {
        Self {
            strike_axis: SweepAxis::new(40.0, 70.0, 10.0),
            vol_axis_pct: SweepAxis::new(20.0, 100.0, 20.0),
            display_decimals: 1,
            ..Self::default()
        }
    }

    /// Parse a TOML document. An empty document yields [`SweepConfig::default`].
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse sweep config")
    }

    /// Read and parse a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Check the base inputs against the model domain.
    ///
    /// The volatility table's parameters are checked at its lowest vol; the grid's
    /// strikes and vols come from the axes, which only warn when degenerate since
    /// an empty sweep is a valid outcome.
    pub fn validate(&self) -> Result<()> {
        let lowest_vol: OptionParameters = self.market.with(self.strike, FIXED_VOL_STEP);
        if let Err(e) = lowest_vol.validate() {
            tracing::warn!(error = %e, "sweep config outside the model domain");
            return Err(e.context("invalid sweep config"));
        }

        for (name, axis) in [
            ("strike_axis", &self.strike_axis),
            ("vol_axis_pct", &self.vol_axis_pct),
        ] {
            if axis.is_empty() {
                tracing::warn!(axis = name, ?axis, "axis produces no points");
            }
        }
        if self.strike_axis.start <= 0.0 {
            tracing::warn!(
                start = self.strike_axis.start,
                "strike axis starts at or below zero"
            );
        }
        if self.vol_axis_pct.start <= 0.0 {
            tracing::warn!(start = self.vol_axis_pct.start, "vol axis starts at or below zero");
        }
        Ok(())
    }

    /// Volatility table at [`Self::strike`].
    pub fn run_table(&self) -> SweepTable {
        sweep_volatility(&self.market, self.strike)
    }

    /// Heatmap grid over both axes.
    pub fn run_grid(&self) -> SweepGrid {
        sweep_grid(&self.market, &self.strike_axis, &self.vol_axis_pct)
    }
}

fn default_strike() -> f64 {
    55.0
}

fn default_strike_axis() -> SweepAxis {
    SweepAxis::new(40.0, 70.0, 5.0)
}

fn default_vol_axis_pct() -> SweepAxis {
    SweepAxis::new(10.0, 100.0, 10.0)
}

fn default_display_decimals() -> u32 {
    2
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let cfg = SweepConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, SweepConfig::default());
    }

    #[test]
    fn partial_toml_overrides_named_fields() {
        let cfg = SweepConfig::from_toml_str(
            r#"
            strike = 60.0

            [market]
            spot = 100.0

            [vol_axis_pct]
            start = 20.0
            stop = 60.0
            step = 20.0
            "#,
        )
        .unwrap();

        assert_eq!(cfg.strike, 60.0);
        assert_eq!(cfg.market.spot, 100.0);
        assert_eq!(cfg.market.premium, 2.5);
        assert_eq!(cfg.vol_axis_pct, SweepAxis::new(20.0, 60.0, 20.0));
        assert_eq!(cfg.strike_axis, default_strike_axis());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(SweepConfig::from_toml_str("strike = \"high\"").is_err());
    }
}
