use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Bank-wide settings for a ledger instance.
///
/// Every field has a default, so a JSON file only needs to list the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LedgerConfig {
    pub bank_name: String,
    /// ISO currency code, display only.
    pub currency: String,
    pub currency_symbol: String,
    /// Annual rate in percent for new savings accounts.
    pub default_interest_rate: Decimal,
    pub default_overdraft_limit: Decimal,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            bank_name: "Axizulo African Bank".to_string(),
            currency: "ZAR".to_string(),
            currency_symbol: "R".to_string(),
            default_interest_rate: dec!(2.5),
            default_overdraft_limit: dec!(1000.00),
        }
    }
}

impl LedgerConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bank_name.trim().is_empty() {
            return Err(ConfigError::Invalid("bank_name cannot be empty".to_string()));
        }
        if self.default_interest_rate < Decimal::ZERO {
            return Err(ConfigError::Invalid(
                "default_interest_rate cannot be negative".to_string(),
            ));
        }
        if self.default_overdraft_limit < Decimal::ZERO {
            return Err(ConfigError::Invalid(
                "default_overdraft_limit cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
