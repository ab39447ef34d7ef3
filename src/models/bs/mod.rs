// Black-Scholes kernels for European calls and puts on a non-dividend-paying
// underlying. These functions do not validate their arguments; callers go through
// `PricingInputs::validate` first, which guarantees S, K, T, sigma > 0.

use super::utils::{discount_factor, norm_cdf};
use super::OptionKind;

/// Standardized Black-Scholes terms `(d1, d2)`.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> (f64, f64) {
    let sigma_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, T, r, sigma);
    S * norm_cdf(d1) - K * discount_factor(r, T) * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, T, r, sigma);
    K * discount_factor(r, T) * norm_cdf(-d2) - S * norm_cdf(-d1)
}

/// Dispatch on option kind.
#[allow(non_snake_case)]
pub fn bs_price(kind: OptionKind, S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    match kind {
        OptionKind::Call => bs_call_price(S, K, T, r, sigma),
        OptionKind::Put => bs_put_price(S, K, T, r, sigma),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_d1_d2_atm() {
        let (d1, d2) = d1_d2(100.0, 100.0, 1.0, 0.05, 0.2);
        // (0 + (0.05 + 0.02) * 1) / 0.2
        assert_abs_diff_eq!(d1, 0.35, epsilon = 1e-12);
        assert_abs_diff_eq!(d2, 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_atm_reference_prices() {
        let call = bs_call_price(100.0, 100.0, 1.0, 0.05, 0.2);
        let put = bs_put_price(100.0, 100.0, 1.0, 0.05, 0.2);
        assert_abs_diff_eq!(call, 10.450_583_572_185_565, epsilon = 1e-9);
        assert_abs_diff_eq!(put, 5.573_526_022_256_971, epsilon = 1e-9);
    }

    #[test]
    fn test_bs_price_dispatch() {
        assert_eq!(
            bs_price(OptionKind::Call, 110.0, 100.0, 0.5, 0.03, 0.25),
            bs_call_price(110.0, 100.0, 0.5, 0.03, 0.25)
        );
        assert_eq!(
            bs_price(OptionKind::Put, 110.0, 100.0, 0.5, 0.03, 0.25),
            bs_put_price(110.0, 100.0, 0.5, 0.03, 0.25)
        );
    }

    #[test]
    fn test_put_uses_symmetric_tails() {
        // Far out of the money both tail terms underflow; the price must not go negative.
        let put = bs_put_price(1000.0, 100.0, 0.25, 0.01, 0.1);
        assert!(put >= 0.0 && put < 1e-12, "put={put}");
    }
}
