//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_STORE_NAME=ShopHub                                      │
//! │     STOREFRONT_CATALOG_PATH=./products.json                            │
//! │     STOREFRONT_TAX_RATE=8                                              │
//! │     STOREFRONT_SEARCH_DEBOUNCE_MS=300                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $STOREFRONT_CONFIG, or                                             │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "ShopHub"
//! currency_symbol = "$"
//! currency_decimals = 2
//! tax_rate_bps = 800
//! default_max_price = 1000.0
//! search_debounce_ms = 300
//! catalog_path = "/srv/storefront/products.json"
//! ```
//!
//! Configuration is read-only after startup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_core::money;
use storefront_core::{Money, TaxRate, DEFAULT_MAX_PRICE_CENTS, DEFAULT_TAX_RATE_BPS};
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Store name (shown in the navbar)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Tax rate applied to the order summary, in basis points
    /// e.g., 800 = 8%
    pub tax_rate_bps: u32,

    /// Upper bound of the price filter before a catalog is loaded
    #[serde(with = "money::decimal")]
    pub default_max_price: Money,

    /// Quiet period before a search edit is applied
    pub search_debounce_ms: u64,

    /// JSON catalog file. The built-in sample catalog is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "ShopHub"
    /// - Currency: $ with 2 decimals
    /// - Tax: 8%
    /// - Price filter: $0 - $1000
    /// - Search debounce: 300ms
    /// - Catalog: built-in sample
    fn default() -> Self {
        ConfigState {
            store_name: "ShopHub".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            default_max_price: Money::from_cents(DEFAULT_MAX_PRICE_CENTS),
            search_debounce_ms: 300,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Loads configuration from `$STOREFRONT_CONFIG` or the platform config
    /// directory, then applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os("STOREFRONT_CONFIG")
            .map(PathBuf::from)
            .or_else(Self::default_config_path);
        Self::load_from(path.as_deref())
    }

    /// Loads configuration from an explicit file (if it exists), then
    /// applies environment overrides.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if path.exists() => {
                info!(?path, "Loading config from file");
                let contents =
                    std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
                Self::from_toml_str(&contents)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                ConfigState::default()
            }
            None => ConfigState::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Creates a ConfigState from environment variables and defaults.
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();
        config.apply_env_overrides();
        config
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::Invalid("store_name must not be empty".into()));
        }

        if self.tax_rate_bps > 10_000 {
            return Err(ConfigError::Invalid(format!(
                "tax_rate_bps must be at most 10000, got {}",
                self.tax_rate_bps
            )));
        }

        if self.currency_decimals > 4 {
            return Err(ConfigError::Invalid(format!(
                "currency_decimals must be at most 4, got {}",
                self.currency_decimals
            )));
        }

        if self.default_max_price.is_negative() {
            return Err(ConfigError::Invalid(
                "default_max_price must not be negative".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `STOREFRONT_*` overrides read through `lookup`.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CATALOG_PATH`: JSON catalog file
    /// - `STOREFRONT_TAX_RATE`: Override tax rate as a percentage (e.g., "8")
    /// - `STOREFRONT_SEARCH_DEBOUNCE_MS`: Override search debounce
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            self.store_name = store_name;
        }

        if let Some(path) = lookup("STOREFRONT_CATALOG_PATH") {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(rate) = lookup("STOREFRONT_TAX_RATE") {
            match rate.trim().parse::<f64>() {
                Ok(pct) if pct.is_finite() && pct >= 0.0 => {
                    self.tax_rate_bps = TaxRate::from_percentage(pct).bps();
                }
                _ => warn!(rate = %rate, "Ignoring invalid STOREFRONT_TAX_RATE"),
            }
        }

        if let Some(ms) = lookup("STOREFRONT_SEARCH_DEBOUNCE_MS") {
            match ms.trim().parse::<u64>() {
                Ok(ms) => self.search_debounce_ms = ms,
                Err(_) => warn!(value = %ms, "Ignoring invalid STOREFRONT_SEARCH_DEBOUNCE_MS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_app::state::ConfigState;
    /// use storefront_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let sign = if cents < 0 { "-" } else { "" };

        // Money carries two decimal places: round half up to at most two,
        // then pad any extra with zeros
        let shown = u32::from(self.currency_decimals.min(2));
        let unit = 10u64.pow(2 - shown);
        let rounded = (cents.unsigned_abs() + unit / 2) / unit;
        let scale = 10u64.pow(shown);
        let whole = rounded / scale;

        if self.currency_decimals == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, whole);
        }

        let frac = format!("{:0>width$}", rounded % scale, width = shown as usize);
        format!(
            "{}{}{}.{:0<width$}",
            sign,
            self.currency_symbol,
            whole,
            frac,
            width = self.currency_decimals as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.tax_rate().bps(), 800);
        assert_eq!(config.default_max_price, Money::from_cents(100_000));
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert!(config.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_format_currency_decimals() {
        let mut config = ConfigState::default();
        config.currency_symbol = "€".to_string();
        config.currency_decimals = 0;
        assert_eq!(config.format_currency(Money::from_cents(1250)), "€13");

        config.currency_decimals = 1;
        assert_eq!(config.format_currency(Money::from_cents(1250)), "€12.5");
        assert_eq!(config.format_currency(Money::from_cents(1239)), "€12.4");
        assert_eq!(config.format_currency(Money::from_cents(1234)), "€12.3");
        assert_eq!(config.format_currency(Money::from_cents(1295)), "€13.0");
        assert_eq!(config.format_currency(Money::from_cents(-1239)), "-€12.4");

        config.currency_decimals = 3;
        assert_eq!(config.format_currency(Money::from_cents(1250)), "€12.500");
    }

    #[test]
    fn test_from_toml_keeps_defaults_for_missing_keys() {
        let config = ConfigState::from_toml_str(
            r#"
            store_name = "Corner Shop"
            tax_rate_bps = 825
            default_max_price = 250.5
            catalog_path = "/srv/products.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.tax_rate_bps, 825);
        assert_eq!(config.default_max_price, Money::from_cents(25050));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/products.json")));
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn test_from_toml_rejects_bad_types() {
        let err = ConfigState::from_toml_str("tax_rate_bps = \"high\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ConfigState::default();
        config.apply_overrides(|key| match key {
            "STOREFRONT_STORE_NAME" => Some("Night Market".to_string()),
            "STOREFRONT_CATALOG_PATH" => Some("./products.json".to_string()),
            "STOREFRONT_TAX_RATE" => Some("8.25".to_string()),
            "STOREFRONT_SEARCH_DEBOUNCE_MS" => Some("150".to_string()),
            _ => None,
        });

        assert_eq!(config.store_name, "Night Market");
        assert_eq!(config.catalog_path, Some(PathBuf::from("./products.json")));
        assert_eq!(config.tax_rate_bps, 825);
        assert_eq!(config.search_debounce_ms, 150);
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let mut config = ConfigState::default();
        config.apply_overrides(|key| match key {
            "STOREFRONT_TAX_RATE" => Some("lots".to_string()),
            "STOREFRONT_SEARCH_DEBOUNCE_MS" => Some("-5".to_string()),
            _ => None,
        });

        assert_eq!(config.tax_rate_bps, 800);
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn test_validate() {
        let mut config = ConfigState::default();
        config.tax_rate_bps = 10_001;
        assert!(config.validate().is_err());

        let mut config = ConfigState::default();
        config.store_name = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = ConfigState::default();
        config.currency_decimals = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("storefront-config-does-not-exist.toml");
        let config = ConfigState::load_from(Some(&path)).unwrap();
        assert_eq!(config.tax_rate_bps, ConfigState::from_env().tax_rate_bps);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ConfigState::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("store_name = \"ShopHub\""));
        assert_eq!(ConfigState::from_toml_str(&toml_str).unwrap(), config);
    }
}
