//! Quote model.
//!
//! A quote bundles the shifts planned for a job with any flat extras
//! (freight, consumables, third-party charges). The invoice total is the
//! sum of per-shift costs plus the extras.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Shift;

/// A flat extra line item on a quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    /// Human-readable description of the charge.
    #[serde(default)]
    pub description: String,
    /// The flat amount charged.
    #[serde(default)]
    pub amount: Decimal,
}

/// A service quote: shifts plus flat extras for one customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The customer the quote is for.
    #[serde(default)]
    pub customer: String,
    /// The name of the rate card used to cost the quote.
    #[serde(default)]
    pub rate_card: String,
    /// The shifts planned for the job.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// Flat extra charges on top of labour.
    #[serde(default)]
    pub extras: Vec<Extra>,
}

impl Quote {
    /// Returns the sum of all flat extras on the quote.
    pub fn extras_total(&self) -> Decimal {
        self.extras.iter().map(|e| e.amount).sum()
    }

    /// Returns true if any shift id appears more than once.
    ///
    /// Shift ids must be unique within a quote; duplicates would make
    /// per-shift cost lines ambiguous on the rendered invoice.
    pub fn has_duplicate_shift_ids(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.shifts.iter().any(|s| !seen.insert(s.id))
    }
}
