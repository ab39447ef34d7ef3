use crate::inputs::PricingInputs;
use crate::models::OptionKind;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Market scenario shared by every option kind the driver prices
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default = "default_spot")]
    pub spot: f64,

    #[serde(default = "default_strike")]
    pub strike: f64,

    /// Time to maturity in years
    #[serde(default = "default_maturity")]
    pub maturity: f64,

    /// Annualized risk-free rate
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Annualized volatility
    #[serde(default = "default_volatility")]
    pub volatility: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            maturity: default_maturity(),
            rate: default_rate(),
            volatility: default_volatility(),
        }
    }
}

/// Configuration for the pricing driver
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricerConfig {
    #[serde(default)]
    pub inputs: ScenarioConfig,

    /// Decimal places used when printing prices
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Option kinds to price, in output order
    #[serde(default = "default_kinds")]
    pub kinds: Vec<OptionKind>,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            inputs: ScenarioConfig::default(),
            precision: default_precision(),
            kinds: default_kinds(),
        }
    }
}

impl PricerConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse pricer config")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    pub fn inputs_for(&self, kind: OptionKind) -> PricingInputs {
        let s = &self.inputs;
        PricingInputs::new(s.spot, s.strike, s.maturity, s.rate, s.volatility, kind)
    }
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_maturity() -> f64 {
    1.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.2
}

fn default_precision() -> usize {
    2
}

fn default_kinds() -> Vec<OptionKind> {
    vec![OptionKind::Call, OptionKind::Put]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_sample_scenario() {
        let config = PricerConfig::default();
        let inputs = config.inputs_for(OptionKind::Put);
        assert_eq!(
            inputs,
            PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Put)
        );
        assert_eq!(config.precision, 2);
        assert_eq!(config.kinds, vec![OptionKind::Call, OptionKind::Put]);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = PricerConfig::from_toml_str("").unwrap();
        assert_eq!(config.inputs.spot, 100.0);
        assert_eq!(config.kinds.len(), 2);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config = PricerConfig::from_toml_str(
            r#"
            precision = 4
            kinds = ["put"]

            [inputs]
            spot = 150.0
            "#,
        )
        .unwrap();
        assert_eq!(config.precision, 4);
        assert_eq!(config.kinds, vec![OptionKind::Put]);
        assert_eq!(config.inputs.spot, 150.0);
        assert_eq!(config.inputs.strike, 100.0);
        assert_eq!(config.inputs.volatility, 0.2);
    }

    #[test]
    fn test_malformed_documents_are_errors() {
        assert!(PricerConfig::from_toml_str("precision = ").is_err());
        assert!(PricerConfig::from_toml_str(r#"kinds = ["straddle"]"#).is_err());
        assert!(PricerConfig::from_toml_str(r#"[inputs]
spot = "high""#)
        .is_err());
    }

    #[test]
    fn test_kinds_parse_like_from_str() {
        let config = PricerConfig::from_toml_str(r#"kinds = ["Call", " PUT "]"#).unwrap();
        assert_eq!(config.kinds, vec![OptionKind::Call, OptionKind::Put]);

        let err = PricerConfig::from_toml_str(r#"kinds = ["straddle"]"#).unwrap_err();
        let msg = format!("{err:#}");
        assert!(
            msg.contains(r#"invalid option kind: "straddle""#),
            "unexpected error: {msg}"
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = PricerConfig::from_toml_str(
            r#"
            [inputs]
            sigma = 0.3
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("sigma"));

        assert!(PricerConfig::from_toml_str("precison = 3").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = PricerConfig::from_file("/nonexistent/pricer.toml").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/pricer.toml"));
    }
}
