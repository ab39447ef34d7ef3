//! Error taxonomy for pricing calls.

/// Reasons a pricing call is rejected before the formula is evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// The option-kind selector was neither `call` nor `put`.
    #[error("invalid option kind: {0:?} (expected \"call\" or \"put\")")]
    InvalidOptionKind(String),

    /// A numeric input is outside its domain (non-positive or non-finite).
    #[error("invalid numeric input: {name}={value}")]
    InvalidNumericInput { name: &'static str, value: f64 },

    /// Inputs were individually valid but a formula term overflowed
    /// (e.g. `e^(-rT)` for a large negative `r*T`, or `sigma^2` for huge `sigma`).
    #[error("non-finite {term}={value}; inputs are outside the representable range")]
    NonFiniteTerm { term: &'static str, value: f64 },
}

pub type PricingResult<T> = Result<T, PricingError>;
