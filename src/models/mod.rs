pub mod bs;

use crate::error::PricingError;
use std::fmt;
use std::str::FromStr;

/// European option kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", try_from = "String"))]
pub enum OptionKind {
    #[default]
    Call,
    Put,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }

    /// Capitalized name for display, e.g. `"Call"`.
    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Call => "Call",
            OptionKind::Put => "Put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    /// Parses `"call"` / `"put"`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(PricingError::InvalidOptionKind(s.to_string())),
        }
    }
}

impl TryFrom<&str> for OptionKind {
    type Error = PricingError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// Deserialization goes through `FromStr` so config files accept the same
// selectors as `parse()`.
impl TryFrom<String> for OptionKind {
    type Error = PricingError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Numeric helpers shared by the pricing formulas
pub mod utils {
    use super::OptionKind;
    use std::f64::consts::FRAC_1_SQRT_2;

    /// Standard normal CDF.
    ///
    /// Written as `0.5 * erfc(-x / sqrt(2))` rather than `0.5 * (1 + erf(x / sqrt(2)))`
    /// so the lower tail keeps full relative precision instead of cancelling to zero.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
    }

    /// Continuous-compounding discount factor `e^(-r*t)`.
    pub fn discount_factor(r: f64, t: f64) -> f64 {
        (-r * t).exp()
    }

    /// Payoff against the discounted strike: `max(S - K*e^(-rT), 0)` for calls,
    /// `max(K*e^(-rT) - S, 0)` for puts.
    ///
    /// This is the value the Black-Scholes price tends to as either `sigma` or
    /// `t` goes to zero.
    pub fn intrinsic_value(kind: OptionKind, spot: f64, strike: f64, r: f64, t: f64) -> f64 {
        let discounted_strike = strike * discount_factor(r, t);
        match kind {
            OptionKind::Call => (spot - discounted_strike).max(0.0),
            OptionKind::Put => (discounted_strike - spot).max(0.0),
        }
    }
}
