// demos/pricing_demo.rs

//! Price the sample call and put with the Black-Scholes formula.
//!
//! Usage: `cargo run --example pricing_demo [config.toml]`
//!
//! Without a config file the sample scenario is used
//! (S=100, K=100, T=1, r=0.05, sigma=0.2). Set `RUST_LOG=bs_pricer=debug`
//! to see d1/d2 for each evaluation.

use anyhow::{Context, Result};
use bs_pricer::{price_inputs, PricerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => PricerConfig::from_file(&path)?,
        None => PricerConfig::default(),
    };
    tracing::info!(?config, "loaded pricer config");

    for kind in &config.kinds {
        let inputs = config.inputs_for(*kind);
        let value =
            price_inputs(&inputs).with_context(|| format!("failed to price {kind} option"))?;
        println!(
            "{} Price: {:.prec$}",
            kind.label(),
            value,
            prec = config.precision
        );
    }

    Ok(())
}
