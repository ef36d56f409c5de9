//! Trade Pipeline Binary
//!
//! Runs one demo trade through the pipeline and prints the journal id.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin trade-pipeline
//! ```
//!
//! # Environment Variables
//!
//! - `DEFAULT_SYMBOL`: Ticker for the demo run and the missing-symbol fallback (default: AAPL)
//! - `JOURNAL_DIR`: Journal directory (default: journal)
//! - `PIPELINE_CONFIG`: YAML config file (default: pipeline.yaml when present)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;

use anyhow::Context;
use rust_decimal_macros::dec;
use trade_pipeline::config::{Config, load_config};
use trade_pipeline::{
    AutoApproval, JsonlJournal, OrderSide, RiskValidationService, Signal, SimulatedBroker,
    StaticMarketData, StubPipelineRunner, TradeState,
};

fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting trade pipeline");

    let config = load_config(None).context("failed to load configuration")?;
    log_config(&config);

    let runner = create_runner(&config)?;
    let state = runner
        .invoke(demo_state(&config))
        .context("pipeline run failed")?;

    if let Some(journal_id) = state.journal_id() {
        println!("Journaled: {journal_id}");
    }

    Ok(())
}

/// Load `.env` from the working directory or the nearest ancestor.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Initialize the tracing subscriber with environment filter.
fn init_tracing() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "trade_pipeline=info".parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn log_config(config: &Config) {
    tracing::info!(
        default_symbol = %config.pipeline.default_symbol,
        allow_defaults = config.pipeline.allow_defaults,
        max_trade_risk = %config.risk.max_trade_risk,
        journal_dir = %config.journal.dir.display(),
        "Configuration loaded"
    );
}

/// Wire the stub adapters and open the journal.
fn create_runner(config: &Config) -> anyhow::Result<StubPipelineRunner> {
    let journal = JsonlJournal::open(&config.journal.dir).with_context(|| {
        format!(
            "failed to open journal at '{}'",
            config.journal.dir.display()
        )
    })?;
    tracing::info!(dir = %journal.dir().display(), "Journal opened");

    Ok(StubPipelineRunner::new(
        Arc::new(StaticMarketData::new()),
        Arc::new(RiskValidationService::new(config.risk.limits())),
        Arc::new(AutoApproval),
        Arc::new(SimulatedBroker::new()),
        Arc::new(journal),
        config.pipeline.defaults(),
    ))
}

/// Demo input: a bracketed buy of the configured default symbol.
fn demo_state(config: &Config) -> TradeState {
    TradeState::new()
        .with_symbol(config.pipeline.default_symbol.as_str())
        .with_signal(
            Signal::new(OrderSide::Buy, dec!(5))
                .with_stop(dec!(98.0))
                .with_take_profit(dec!(102.0)),
        )
}
