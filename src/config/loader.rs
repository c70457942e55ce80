//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate card
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{QuoteError, QuoteResult};
use crate::models::RateCard;

use super::types::RatesConfig;

/// Loads and provides access to rate card configuration.
///
/// The `ConfigLoader` reads `rates.yaml` from a directory and provides
/// lookup of named rate cards.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── rates.yaml    # Metadata plus named rate cards
/// ```
///
/// # Example
///
/// ```no_run
/// use shiftcost_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
///
/// let card = loader.rate_card("standard").unwrap();
/// println!("Weekday rate: ${}", card.site_normal);
///
/// let default = loader.default_rate_card().unwrap();
/// println!("Default weekend rate: ${}", default.weekend);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RatesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// rates file is missing or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shiftcost_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// # Ok::<(), shiftcost_engine::error::QuoteError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> QuoteResult<Self> {
        let rates_path = path.as_ref().join("rates.yaml");
        let config = Self::load_yaml::<RatesConfig>(&rates_path)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> QuoteResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| QuoteError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| QuoteError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &RatesConfig {
        &self.config
    }

    /// Looks up a rate card by name.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::RateCardNotFound`] when no card with the given
    /// name exists.
    pub fn rate_card(&self, name: &str) -> QuoteResult<&RateCard> {
        self.config
            .card(name)
            .ok_or_else(|| QuoteError::RateCardNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the rate card named by the configuration's default.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::RateCardNotFound`] when the configured default
    /// names a card that does not exist.
    pub fn default_rate_card(&self) -> QuoteResult<&RateCard> {
        self.rate_card(&self.config.metadata().default_card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn loader_from_yaml(yaml: &str) -> ConfigLoader {
        ConfigLoader {
            config: serde_yaml::from_str(yaml).unwrap(),
        }
    }

    const SAMPLE: &str = r#"
metadata:
  name: Test rates
  currency: AUD
  version: "2026-07-01"
  default_card: standard
cards:
  standard:
    site_normal: "95.00"
    site_overtime: "142.50"
    weekend: "142.50"
    public_holiday: "190.00"
    vehicle: "85.00"
    per_diem: "120.00"
  remote:
    site_normal: "110.00"
    site_overtime: "165.00"
    weekend: "165.00"
    public_holiday: "220.00"
    vehicle: "95.00"
    per_diem: "160.00"
"#;

    #[test]
    fn test_load_missing_directory_fails() {
        let result = ConfigLoader::load("/nonexistent/config");
        assert!(matches!(result, Err(QuoteError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("./config").unwrap();
        let card = loader.rate_card("standard").unwrap();
        assert!(card.site_normal > Decimal::ZERO);
        assert!(loader.default_rate_card().is_ok());
    }

    #[test]
    fn test_rate_card_lookup() {
        let loader = loader_from_yaml(SAMPLE);
        let remote = loader.rate_card("remote").unwrap();
        assert_eq!(remote.per_diem, Decimal::from_str("160.00").unwrap());
    }

    #[test]
    fn test_unknown_card_errors() {
        let loader = loader_from_yaml(SAMPLE);
        let result = loader.rate_card("platinum");
        assert!(matches!(
            result,
            Err(QuoteError::RateCardNotFound { name }) if name == "platinum"
        ));
    }

    #[test]
    fn test_default_card_resolves() {
        let loader = loader_from_yaml(SAMPLE);
        let default = loader.default_rate_card().unwrap();
        assert_eq!(default.site_normal, Decimal::from_str("95.00").unwrap());
    }
}
