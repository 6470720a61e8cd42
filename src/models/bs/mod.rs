// A minimal Black-Scholes implementation that prices European calls and puts as
// P&L figures net of a flat premium.  The kernel is deliberately unguarded: it
// evaluates the closed form for whatever it is given and lets IEEE arithmetic
// report degenerate inputs as `inf`/`NaN`.  Callers that want guarantees go
// through `OptionParameters::validate` first.

use anyhow::{anyhow, Result};

/// Standard normal cumulative distribution function.
///
/// Uses the complementary error function so that both tails keep full double
/// precision: `Φ(x) = 0.5 * erfc(-x / √2)`.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// Which side of a priced option a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PnlKind {
    Call,
    Put,
}

impl PnlKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PnlKind::Call => "call",
            PnlKind::Put => "put",
        }
    }
}

impl std::fmt::Display for PnlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Call and put P&L from a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceResult {
    /// Call value minus premium
    pub call: f64,
    /// Put value minus premium
    pub put: f64,
}

impl PriceResult {
    /// Value for the requested side.
    pub fn pnl(&self, kind: PnlKind) -> f64 {
        match kind {
            PnlKind::Call => self.call,
            PnlKind::Put => self.put,
        }
    }

    /// Copy rounded half away from zero to `decimals` places. Display only.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            call: round_to(self.call, decimals),
            put: round_to(self.put, decimals),
        }
    }
}

/// Round to a fixed number of decimal places; non-finite values pass through.
pub fn round_to(x: f64, decimals: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let factor = 10f64.powi(decimals as i32);
    (x * factor).round() / factor
}

/// Closed-form Black-Scholes call/put P&L.
///
/// ```text
/// d1 = (ln(S/K) + (r + vol²/2)·T) / (vol·√T)
/// d2 = d1 - vol·√T
/// call = S·Φ(d1) - K·e^(-rT)·Φ(d2) - premium
/// put  = K·e^(-rT)·Φ(-d2) - S·Φ(-d1) - premium
/// ```
///
/// The formula is only defined for `S, K, T, vol > 0`. Inputs are not checked:
/// `T = 0` or `vol = 0` divide by zero and `S <= 0` or `K <= 0` take the log of a
/// non-positive number, so the result is `inf` or `NaN` in those cases.
#[allow(non_snake_case)]
pub fn bs_price(S: f64, K: f64, T: f64, r: f64, vol: f64, premium: f64) -> PriceResult {
    let vol_sqrt_t = vol * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * vol.powi(2)) * T) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    let discounted_k = K * (-r * T).exp();

    PriceResult {
        call: S * norm_cdf(d1) - discounted_k * norm_cdf(d2) - premium,
        put: discounted_k * norm_cdf(-d2) - S * norm_cdf(-d1) - premium,
    }
}

/// Full input set for one evaluation of [`bs_price`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Underlying spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiration in years (T)
    pub years_to_exp: f64,
    /// Continuously compounded risk-free rate as a decimal (r), may be zero
    pub rate: f64,
    /// Volatility as a decimal, e.g. 0.25 for 25%
    pub vol: f64,
    /// Flat offset subtracted from both call and put value
    pub premium: f64,
}

/// Helper function to check that parameters lie inside the model's domain.
fn validate_option_params(
    spot: f64,
    strike: f64,
    years_to_exp: f64,
    rate: f64,
    vol: f64,
    premium: f64,
) -> Result<()> {
    if spot <= 0.0 || !spot.is_finite() {
        return Err(anyhow!(
            "OptionParameters validation: spot (S={}) must be > 0 and finite",
            spot
        ));
    }
    if strike <= 0.0 || !strike.is_finite() {
        return Err(anyhow!(
            "OptionParameters validation: strike (K={}) must be > 0 and finite",
            strike
        ));
    }
    if years_to_exp <= 0.0 || !years_to_exp.is_finite() {
        return Err(anyhow!(
            "OptionParameters validation: time to expiry (T={}) must be > 0 and finite",
            years_to_exp
        ));
    }
    if !rate.is_finite() {
        return Err(anyhow!(
            "OptionParameters validation: rate (r={}) must be finite",
            rate
        ));
    }
    if vol <= 0.0 || !vol.is_finite() {
        return Err(anyhow!(
            "OptionParameters validation: volatility (vol={}) must be > 0 and finite",
            vol
        ));
    }
    if !premium.is_finite() {
        return Err(anyhow!(
            "OptionParameters validation: premium ({}) must be finite",
            premium
        ));
    }
    Ok(())
}

impl OptionParameters {
    /// Creates new option parameters with validation.
    pub fn new(
        spot: f64,
        strike: f64,
        years_to_exp: f64,
        rate: f64,
        vol: f64,
        premium: f64,
    ) -> Result<Self> {
        validate_option_params(spot, strike, years_to_exp, rate, vol, premium)?;

        Ok(Self {
            spot,
            strike,
            years_to_exp,
            rate,
            vol,
            premium,
        })
    }

    /// Validates the current parameter set.
    pub fn validate(&self) -> Result<()> {
        validate_option_params(
            self.spot,
            self.strike,
            self.years_to_exp,
            self.rate,
            self.vol,
            self.premium,
        )
    }

    /// Price without checking the domain. See [`bs_price`].
    pub fn price(&self) -> PriceResult {
        bs_price(
            self.spot,
            self.strike,
            self.years_to_exp,
            self.rate,
            self.vol,
            self.premium,
        )
    }

    /// Validate, then price. The numeric result is identical to [`Self::price`].
    pub fn price_checked(&self) -> Result<PriceResult> {
        self.validate()?;
        Ok(self.price())
    }
}
