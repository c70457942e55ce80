//! Rate card model.
//!
//! A rate card is the pricing configuration applied to a shift: hourly rates
//! per day type plus flat allowances. Cards are selected per customer or per
//! quote and are immutable during a calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hourly rates and flat allowances for costing a shift.
///
/// Every field defaults to zero when absent so a sparsely configured card
/// still produces a valid (if cheap) quote rather than a deserialization
/// error.
///
/// # Example
///
/// ```
/// use shiftcost_engine::models::RateCard;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let card = RateCard {
///     site_normal: Decimal::from_str("95.00").unwrap(),
///     site_overtime: Decimal::from_str("142.50").unwrap(),
///     weekend: Decimal::from_str("142.50").unwrap(),
///     public_holiday: Decimal::from_str("190.00").unwrap(),
///     vehicle: Decimal::from_str("85.00").unwrap(),
///     per_diem: Decimal::from_str("120.00").unwrap(),
/// };
/// assert_eq!(card.site_overtime, Decimal::from_str("142.50").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    /// Hourly rate for weekday normal time.
    #[serde(default)]
    pub site_normal: Decimal,
    /// Hourly rate for weekday overtime and night shifts.
    #[serde(default)]
    pub site_overtime: Decimal,
    /// Flat hourly rate for all weekend hours.
    #[serde(default)]
    pub weekend: Decimal,
    /// Flat hourly rate for all public holiday hours.
    #[serde(default)]
    pub public_holiday: Decimal,
    /// Per-day vehicle allowance.
    #[serde(default)]
    pub vehicle: Decimal,
    /// Per-night per-diem allowance.
    #[serde(default)]
    pub per_diem: Decimal,
}
