//! Flat allowance calculation.
//!
//! Vehicle and per-diem allowances are flat per-shift additions, applied
//! after the day-type branch and regardless of day type or hours worked.

use rust_decimal::Decimal;

use crate::models::{RateCard, Shift};

/// Returns the flat allowance portion of a shift's cost.
///
/// Adds the per-day vehicle allowance when the shift uses a vehicle and the
/// per-night per-diem allowance when one applies. Independent of hours and
/// day type.
///
/// # Example
///
/// ```
/// use shiftcost_engine::calculation::allowance_total;
/// use shiftcost_engine::models::{DayType, RateCard, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateCard {
///     vehicle: Decimal::from_str("85.00").unwrap(),
///     per_diem: Decimal::from_str("120.00").unwrap(),
///     ..RateCard::default()
/// };
/// let shift = Shift {
///     id: 1,
///     date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     day_type: DayType::Weekday,
///     tech: "J. Moreau".to_string(),
///     start_time: "08:00".to_string(),
///     finish_time: "16:00".to_string(),
///     travel_in: Decimal::ZERO,
///     travel_out: Decimal::ZERO,
///     vehicle: true,
///     per_diem: true,
///     is_night_shift: false,
/// };
///
/// assert_eq!(allowance_total(&shift, &rates), Decimal::from_str("205.00").unwrap());
/// ```
pub fn allowance_total(shift: &Shift, rates: &RateCard) -> Decimal {
    let mut total = Decimal::ZERO;
    if shift.vehicle {
        total += rates.vehicle;
    }
    if shift.per_diem {
        total += rates.per_diem;
    }
    total
}
