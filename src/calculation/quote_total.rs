//! Quote total aggregation.
//!
//! The invoice total for a quote is the sum of every shift's calculated
//! cost plus the flat extras. Per-shift costs are already rounded to the
//! cent, so the total is an exact sum.

use rust_decimal::Decimal;

use crate::models::{Quote, RateCard};

use super::breakdown::calculate_shift_breakdown;

/// Computes the invoice total for a quote against a rate card.
///
/// # Example
///
/// ```
/// use shiftcost_engine::calculation::calculate_quote_total;
/// use shiftcost_engine::models::{Extra, Quote, RateCard};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let quote = Quote {
///     customer: "Acme Mining".to_string(),
///     rate_card: "standard".to_string(),
///     shifts: vec![],
///     extras: vec![Extra {
///         description: "Freight".to_string(),
///         amount: Decimal::from_str("150.00").unwrap(),
///     }],
/// };
///
/// let total = calculate_quote_total(&quote, &RateCard::default());
/// assert_eq!(total, Decimal::from_str("150.00").unwrap());
/// ```
pub fn calculate_quote_total(quote: &Quote, rates: &RateCard) -> Decimal {
    let labour: Decimal = quote
        .shifts
        .iter()
        .map(|shift| calculate_shift_breakdown(shift, rates).cost)
        .sum();
    labour + quote.extras_total()
}
