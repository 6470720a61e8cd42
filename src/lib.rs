//! # BS-Heatmap: Black-Scholes P&L Tables and Heatmaps
//!
//! `bs-heatmap` prices European options with the Black-Scholes closed form and sweeps
//! that price across volatility (a ten-row table) or across volatility and strike (a
//! heatmap grid).  Every value is reported as P&L net of a flat premium.
//!
//! ## Core Features
//!
//! - **Pricing kernel**: branch-free Black-Scholes call/put with an accurate normal CDF
//! - **Volatility table**: fixed 10%..100% ladder at a single strike
//! - **Heatmap grid**: volatility x strike matrices for call and put, with labels
//! - **Renderers**: text tables, CSV export and SVG heatmaps for any front-end
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_heatmap::{price, sweep_grid, sweep_volatility, MarketParameters, SweepAxis};
//!
//! // One evaluation: S=100, K=100, T=1y, r=5%, vol=20%, no premium
//! let result = price(100.0, 100.0, 1.0, 0.05, 0.20, 0.0);
//! assert!((result.call - 10.450583572185565).abs() < 1e-6);
//!
//! // Ten-row volatility table
//! let market = MarketParameters { spot: 50.0, years_to_exp: 1.0, rate: 0.02, premium: 2.5 };
//! let table = sweep_volatility(&market, 55.0);
//! assert_eq!(table.len(), 10);
//!
//! // Volatility x strike heatmap
//! let grid = sweep_grid(
//!     &market,
//!     &SweepAxis::new(40.0, 70.0, 5.0),
//!     &SweepAxis::new(10.0, 100.0, 10.0),
//! );
//! assert_eq!(grid.call.col_labels().len(), 7);
//! assert_eq!(grid.call.row_labels().len(), 10);
//! ```
//!
//! ## Domain
//!
//! The kernel does not validate inputs.  The formula is only defined for
//! `S, K, T, vol > 0`; outside that domain results are `inf` or `NaN`.  Use
//! [`OptionParameters::new`] or [`OptionParameters::validate`] for a checked path.
//!
//! ## Configuration Presets
//!
//! - `desktop()`: the desktop form's defaults
//! - `fine()`: denser axes
//! - `coarse()`: sparse axes for a quick look

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod models;
pub mod render;
pub mod sweep;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Pricing kernel and its data types
pub use models::bs::{bs_price, norm_cdf, round_to, OptionParameters, PnlKind, PriceResult};

// Sweep engine
pub use sweep::{
    fixed_vol_ladder, inclusive_range, sweep_volatility_over, MarketParameters, SweepAxis,
    SweepGrid, SweepMatrix, SweepTable, VolRow,
};

// Configuration
pub use config::SweepConfig;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured sweep settings.
///
/// # Available Configurations
///
/// - [`desktop()`]: Starting values of the desktop form
/// - [`fine()`]: 5% vol steps, 2.5 strike steps
/// - [`coarse()`]: 20% vol steps, 10 strike steps
pub mod default_configs {
    use crate::config::SweepConfig;

    /// Defaults of the desktop form.
    ///
    /// **Characteristics:**
    /// - Premium 2.5, spot 50, strike 55, one year, 2% rate
    /// - Strike axis 40..=70 step 5 (7 columns)
    /// - Vol axis 10%..=100% step 10% (10 rows)
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_heatmap::default_configs;
    ///
    /// let config = default_configs::desktop();
    /// assert_eq!(config.run_grid().call.n_cols(), 7);
    /// ```
    pub fn desktop() -> SweepConfig {
        SweepConfig::desktop()
    }

    /// Denser grid for smooth heatmaps.
    ///
    /// **Characteristics:**
    /// - Strike axis 40..=70 step 2.5 (13 columns)
    /// - Vol axis 5%..=100% step 5% (20 rows)
    pub fn fine() -> SweepConfig {
        SweepConfig::fine()
    }

    /// Sparse grid for a quick look.
    ///
    /// **Characteristics:**
    /// - Strike axis 40..=70 step 10 (4 columns)
    /// - Vol axis 20%..=100% step 20% (5 rows)
    /// - One display decimal
    pub fn coarse() -> SweepConfig {
        SweepConfig::coarse()
    }
}

// ================================================================================================
// PRICING AND SWEEP API
// ================================================================================================

/// Black-Scholes call and put P&L for one parameter set.
///
/// # Arguments
///
/// * `spot` - Underlying price `S`
/// * `strike` - Strike price `K`
/// * `years_to_exp` - Time to expiry `T` in years
/// * `rate` - Continuously compounded risk-free rate `r` as a decimal
/// * `vol` - Volatility as a decimal
/// * `premium` - Flat amount subtracted from both call and put
///
/// # Domain
///
/// Only meaningful for `spot, strike, years_to_exp, vol > 0`.  Other inputs are
/// not rejected; they yield `inf` or `NaN` as IEEE arithmetic dictates.
///
/// # Example
///
/// ```rust
/// use bs_heatmap::price;
///
/// let with_premium = price(100.0, 100.0, 1.0, 0.05, 0.2, 2.5);
/// let without = price(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
/// assert_eq!(with_premium.call, without.call - 2.5);
/// ```
pub fn price(
    spot: f64,
    strike: f64,
    years_to_exp: f64,
    rate: f64,
    vol: f64,
    premium: f64,
) -> PriceResult {
    bs_price(spot, strike, years_to_exp, rate, vol, premium)
}

/// Price at vol `0.10, 0.20, ..., 1.00` with every other input fixed.
///
/// Always ten rows in ascending volatility, whatever the inputs.  Values are
/// full precision; use [`SweepTable::rounded`] or [`render::format_vol_table`]
/// for display.
pub fn sweep_volatility(market: &MarketParameters, strike: f64) -> SweepTable {
    sweep::sweep_volatility(market, strike)
}

/// Price every `(vol, strike)` pair of two axes.
///
/// # Arguments
///
/// * `market` - Spot, expiry, rate and premium held fixed
/// * `k_axis` - Strike axis, e.g. `40..=70 step 5`
/// * `vol_axis_pct` - Volatility axis in percent, e.g. `10..=100 step 10`
///
/// # Returns
///
/// A [`SweepGrid`] with a call and a put [`SweepMatrix`], each indexed
/// `[row = vol][col = strike]`, both ascending.  Axes include their stop value when
/// it falls on a step (see [`inclusive_range`]).  A degenerate axis (`stop < start`
/// or `step <= 0`) gives empty matrices, not an error.
///
/// # Example
///
/// ```rust
/// use bs_heatmap::{sweep_grid, MarketParameters, SweepAxis};
///
/// let grid = sweep_grid(
///     &MarketParameters::default(),
///     &SweepAxis::new(70.0, 40.0, 5.0),
///     &SweepAxis::new(10.0, 100.0, 10.0),
/// );
/// assert!(grid.call.is_empty());
/// ```
pub fn sweep_grid(
    market: &MarketParameters,
    k_axis: &SweepAxis,
    vol_axis_pct: &SweepAxis,
) -> SweepGrid {
    sweep::sweep_grid(market, k_axis, vol_axis_pct)
}
