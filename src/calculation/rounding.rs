//! Rounding policy for hour and money quantities.
//!
//! Every intermediate hour quantity is rounded to 2 decimal places *before*
//! being multiplied by a rate and *before* being summed with other
//! same-bucket quantities. Rounding only the final cost instead would shift
//! invoice totals by cents when travel hours are fractional, so callers must
//! apply [`round2`] at each step, not just at the end.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a quantity to 2 decimal places, half away from zero.
///
/// # Example
///
/// ```
/// use shiftcost_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let third = Decimal::from_str("1.3333333").unwrap();
/// assert_eq!(round2(third), Decimal::from_str("1.33").unwrap());
///
/// let half_cent = Decimal::from_str("2.005").unwrap();
/// assert_eq!(round2(half_cent), Decimal::from_str("2.01").unwrap());
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
