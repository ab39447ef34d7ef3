//! # bs-pricer: Black-Scholes Pricing of European Options
//!
//! `bs-pricer` evaluates the Black-Scholes closed-form price of a European call or
//! put on a non-dividend-paying underlying. Every call is a pure function of its
//! inputs: there is no state, and pricing from many threads at once is safe.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: `S·Φ(d1) - K·e^(-rT)·Φ(d2)` for calls and
//!   `K·e^(-rT)·Φ(-d2) - S·Φ(-d1)` for puts
//! - **Eager validation**: non-positive or non-finite inputs are rejected with a
//!   [`PricingError`] before the formula runs
//! - **Typed option kind**: [`OptionKind`] is a closed enum; string selectors are
//!   parsed once at the boundary
//! - **TOML configuration** (feature `serde`, on by default) for the demo driver
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricer::{price, OptionKind};
//!
//! let call = price(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call)?;
//! let put = price(100.0, 100.0, 1.0, 0.05, 0.2, "put".parse()?)?;
//!
//! assert_eq!(format!("{:.2}", call), "10.45");
//! assert_eq!(format!("{:.2}", put), "5.57");
//! # Ok::<(), bs_pricer::PricingError>(())
//! ```

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod inputs;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

#[cfg(feature = "serde")]
pub use config::{PricerConfig, ScenarioConfig};
pub use error::{PricingError, PricingResult};
pub use inputs::PricingInputs;
pub use models::OptionKind;

use models::bs::{bs_price, d1_d2};
use models::utils::discount_factor;

// ================================================================================================
// PRICING
// ================================================================================================

/// Price a European option with the Black-Scholes formula.
///
/// # Arguments
///
/// * `spot` - Current price of the underlying (S), must be > 0
/// * `strike` - Strike price (K), must be > 0
/// * `maturity` - Time to maturity in years (T), must be > 0
/// * `rate` - Annualized, continuously compounded risk-free rate (r), any finite value
/// * `volatility` - Annualized volatility (sigma), must be > 0
/// * `kind` - [`OptionKind::Call`] or [`OptionKind::Put`]
///
/// # Errors
///
/// [`PricingError::InvalidNumericInput`] naming the first offending input when any
/// of the above constraints is violated. Nothing is computed in that case.
///
/// [`PricingError::NonFiniteTerm`] when the inputs are valid but `d1`, `d2`,
/// `e^(-rT)` or the price itself overflows `f64` (e.g. `r = -1000`).
///
/// # Example
///
/// ```rust
/// use bs_pricer::{price, OptionKind};
///
/// // Deep in-the-money call trades close to S - K·e^(-rT)
/// let call = price(150.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// assert!((call - 55.0).abs() < 0.1);
///
/// assert!(price(100.0, 100.0, 0.0, 0.05, 0.2, OptionKind::Call).is_err());
/// ```
pub fn price(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    kind: OptionKind,
) -> PricingResult<f64> {
    price_inputs(&PricingInputs::new(
        spot, strike, maturity, rate, volatility, kind,
    ))
}

/// Price a European option from a [`PricingInputs`] value.
///
/// Same contract as [`price`]: the inputs are validated first, then the formula
/// for `inputs.kind` is evaluated.
pub fn price_inputs(inputs: &PricingInputs) -> PricingResult<f64> {
    inputs.validate()?;

    let PricingInputs {
        spot,
        strike,
        maturity,
        rate,
        volatility,
        kind,
    } = *inputs;

    let (d1, d2) = d1_d2(spot, strike, maturity, rate, volatility);
    finite("d1", d1)?;
    finite("d2", d2)?;
    finite("discount factor", discount_factor(rate, maturity))?;

    let value = finite(
        "price",
        bs_price(kind, spot, strike, maturity, rate, volatility),
    )?;

    tracing::debug!(%kind, spot, strike, maturity, rate, volatility, d1, d2, price = value, "priced option");
    Ok(value)
}

fn finite(term: &'static str, value: f64) -> PricingResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(term, value, "formula term overflowed");
        Err(PricingError::NonFiniteTerm { term, value })
    }
}
