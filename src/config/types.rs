//! Configuration types for rate cards.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML rates file.

use serde::Deserialize;
use std::collections::HashMap;

use crate::models::RateCard;

/// Metadata about the rates configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesMetadata {
    /// The human-readable name of the rate set.
    pub name: String,
    /// ISO currency code the rates are expressed in (e.g., "AUD").
    pub currency: String,
    /// The version or effective date of the rates.
    pub version: String,
    /// The name of the rate card used when a quote does not pick one.
    pub default_card: String,
}

/// The complete rates configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Rates metadata.
    metadata: RatesMetadata,
    /// Map of rate card name to card.
    cards: HashMap<String, RateCard>,
}

impl RatesConfig {
    /// Returns the rates metadata.
    pub fn metadata(&self) -> &RatesMetadata {
        &self.metadata
    }

    /// Returns all rate cards by name.
    pub fn cards(&self) -> &HashMap<String, RateCard> {
        &self.cards
    }

    /// Looks up a rate card by name.
    pub fn card(&self, name: &str) -> Option<&RateCard> {
        self.cards.get(name)
    }
}
