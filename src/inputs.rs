//! The value type a single pricing call consumes.

use crate::error::{PricingError, PricingResult};
use crate::models::OptionKind;

/// Inputs to one Black-Scholes evaluation.
///
/// `rate` and `volatility` are annualized; `maturity` is in years.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub maturity: f64,
    /// Risk-free rate, continuously compounded (r)
    pub rate: f64,
    /// Volatility of the underlying (sigma)
    pub volatility: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: OptionKind,
}

impl PricingInputs {
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            kind,
        }
    }

    /// Same inputs with a different option kind.
    pub fn with_kind(self, kind: OptionKind) -> Self {
        Self { kind, ..self }
    }

    /// Rejects inputs the closed-form formula is undefined on.
    ///
    /// Spot, strike, maturity and volatility must be finite and strictly positive;
    /// the rate may be any finite number, including negative.
    pub fn validate(&self) -> PricingResult<()> {
        positive("spot", self.spot)?;
        positive("strike", self.strike)?;
        positive("maturity", self.maturity)?;
        positive("volatility", self.volatility)?;
        if !self.rate.is_finite() {
            return Err(invalid("rate", self.rate));
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> PricingResult<()> {
    // NaN fails `> 0.0` as well
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, value))
    }
}

fn invalid(name: &'static str, value: f64) -> PricingError {
    tracing::debug!(input = name, value, "rejecting pricing input");
    PricingError::InvalidNumericInput { name, value }
}
