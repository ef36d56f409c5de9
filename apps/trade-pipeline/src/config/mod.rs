//! Configuration module for the trade pipeline.
//!
//! Configuration comes from an optional YAML file with `${VAR}` and
//! `${VAR:-default}` interpolation, followed by environment overrides.
//!
//! # Usage
//!
//! ```rust,ignore
//! use trade_pipeline::config::load_config;
//!
//! // PIPELINE_CONFIG, else ./pipeline.yaml, else built-in defaults
//! let config = load_config(None)?;
//!
//! // Explicit file
//! let config = load_config(Some("deploy/pipeline.yaml"))?;
//!
//! println!("default symbol: {}", config.pipeline.default_symbol);
//! ```

mod journal;
mod pipeline;
mod risk;

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::shared::Symbol;

pub use journal::JournalConfig;
pub use pipeline::PipelineConfig;
pub use risk::RiskConfig;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "PIPELINE_CONFIG";
/// Config file used when `PIPELINE_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "pipeline.yaml";
/// Environment variable overriding `pipeline.default_symbol`.
pub const DEFAULT_SYMBOL_ENV: &str = "DEFAULT_SYMBOL";
/// Environment variable overriding `journal.dir`.
pub const JOURNAL_DIR_ENV: &str = "JOURNAL_DIR";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Pipeline defaults.
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Risk check limits.
    #[serde(default)]
    pub risk: RiskConfig,
    /// Journal location.
    #[serde(default)]
    pub journal: JournalConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration and apply environment overrides.
///
/// The file is `path` if given, else the file named by `PIPELINE_CONFIG`,
/// else `pipeline.yaml` when it exists. With no file at all the built-in
/// defaults are used. `DEFAULT_SYMBOL` and `JOURNAL_DIR` win over the file.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path
        .map(str::to_string)
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().filter(|p| !p.is_empty()))
        .or_else(|| {
            Path::new(DEFAULT_CONFIG_PATH)
                .exists()
                .then(|| DEFAULT_CONFIG_PATH.to_string())
        });

    let mut config = match path {
        Some(path) => {
            let contents =
                std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
                    path: path.clone(),
                    source: e,
                })?;
            tracing::debug!(%path, "Loaded config file");
            parse_config(&contents)?
        }
        None => Config::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from a YAML string (useful for testing).
///
/// Environment overrides are not applied.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let config = parse_config(yaml)?;
    validate_config(&config)?;
    Ok(config)
}

fn parse_config(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    if interpolated.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml_bw::from_str(&interpolated)?)
}

/// Apply `DEFAULT_SYMBOL` and `JOURNAL_DIR`. Empty values are ignored.
fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(symbol) = var(DEFAULT_SYMBOL_ENV) {
        config.pipeline.default_symbol = symbol.trim().to_string();
    }
    if let Some(dir) = var(JOURNAL_DIR_ENV) {
        config.journal.dir = dir.into();
    }
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<Option<regex::Regex>> = OnceLock::new();

    let Some(re) = ENV_VAR_REGEX
        .get_or_init(|| regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").ok())
        .as_ref()
    else {
        return input.to_string();
    };

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    Symbol::new(config.pipeline.default_symbol.as_str())
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("pipeline.default_symbol: {e}")))?;

    config
        .pipeline
        .default_signal
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("pipeline.default_signal: {e}")))?;

    if config.risk.max_trade_risk <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "risk.max_trade_risk must be positive".to_string(),
        ));
    }

    if config.journal.dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "journal.dir must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade::OrderSide;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.pipeline.default_symbol, "AAPL");
        assert!(config.pipeline.allow_defaults);
        assert_eq!(config.pipeline.default_signal.side, OrderSide::Buy);
        assert_eq!(config.pipeline.default_signal.quantity, dec!(1));
        assert_eq!(config.risk.max_trade_risk, dec!(100));
        assert_eq!(config.journal.dir, PathBuf::from("journal"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_empty_config() {
        let config = match load_config_from_string("") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_config() {
        let yaml = r"
risk:
  max_trade_risk: 250.5
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load partial config: {e}"),
        };
        assert_eq!(config.risk.max_trade_risk, dec!(250.5));
        assert_eq!(config.pipeline.default_symbol, "AAPL"); // Default value
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r"
pipeline:
  default_symbol: msft
  allow_defaults: false
  default_signal:
    side: sell
    qty: 3
    stop: 105.5
risk:
  max_trade_risk: 50
journal:
  dir: /var/lib/trade-pipeline/journal
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };

        assert!(!config.pipeline.allow_defaults);
        assert_eq!(config.pipeline.default_signal.side, OrderSide::Sell);
        assert_eq!(config.pipeline.default_signal.quantity, dec!(3));
        assert_eq!(config.pipeline.default_signal.stop, Some(dec!(105.5)));
        assert_eq!(config.risk.limits().max_trade_risk, dec!(50));
        assert_eq!(
            config.journal.dir,
            PathBuf::from("/var/lib/trade-pipeline/journal")
        );

        let defaults = config.pipeline.defaults();
        assert_eq!(defaults.symbol.as_str(), "MSFT");
        assert!(!defaults.allow_defaults);
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "dir: ${TRADE_PIPELINE_CONFIG_TEST_NONEXISTENT_VAR:-journal}";
        assert_eq!(interpolate_env_vars(input), "dir: journal");
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "default_symbol: ${TRADE_PIPELINE_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        assert_eq!(interpolate_env_vars(input), "default_symbol: ");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_with_default_uses_existing() {
        let result = interpolate_env_vars("path: ${PATH:-default}");

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_interpolated_yaml_uses_default() {
        let yaml = r"
pipeline:
  default_symbol: ${TRADE_PIPELINE_CONFIG_TEST_SYMBOL_UNSET:-TSLA}
";
        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.pipeline.default_symbol, "TSLA");
    }

    #[test]
    fn test_env_overrides_win() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("DEFAULT_SYMBOL", " nvda "),
            ("JOURNAL_DIR", "/tmp/journal"),
        ]);
        let mut config = Config::default();

        apply_env_overrides(&mut config, |name| env.get(name).map(ToString::to_string));

        assert_eq!(config.pipeline.default_symbol, "nvda");
        assert_eq!(config.pipeline.defaults().symbol.as_str(), "NVDA");
        assert_eq!(config.journal.dir, PathBuf::from("/tmp/journal"));
    }

    #[test]
    fn test_empty_env_override_is_ignored() {
        let mut config = Config::default();

        apply_env_overrides(&mut config, |_| Some(String::new()));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validation_invalid_symbol() {
        let yaml = r#"
pipeline:
  default_symbol: "AA PL"
"#;

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for invalid symbol");
        };
        assert!(err.to_string().contains("default_symbol"));
    }

    #[test]
    fn test_validation_accepts_share_class_separators() {
        for symbol in ["BRK-B", "BRK/B", "BRK.B"] {
            let yaml = format!("pipeline:\n  default_symbol: {symbol}\n");
            let config = load_config_from_string(&yaml).unwrap();
            assert_eq!(config.pipeline.default_symbol, symbol);
        }
    }

    #[test]
    fn test_validation_non_positive_qty() {
        let yaml = r"
pipeline:
  default_signal:
    side: buy
    qty: 0
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero qty");
        };
        assert!(err.to_string().contains("default_signal"));
    }

    #[test]
    fn test_validation_non_positive_risk() {
        let yaml = r"
risk:
  max_trade_risk: -1
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for negative risk");
        };
        assert!(err.to_string().contains("max_trade_risk"));
    }

    #[test]
    fn test_validation_empty_journal_dir() {
        let yaml = r#"
journal:
  dir: ""
"#;

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for empty dir");
        };
        assert!(err.to_string().contains("journal.dir"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent.yaml");

        let Err(err) = load_config(path.to_str()) else {
            panic!("expected read error");
        };
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_load_config_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("pipeline.yaml");
        std::fs::write(&path, "risk:\n  max_trade_risk: 75\n").unwrap();

        let config = load_config(path.to_str()).unwrap();
        assert_eq!(config.risk.max_trade_risk, dec!(75));
    }
}
