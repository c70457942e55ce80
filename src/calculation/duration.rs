//! Clock-time parsing and shift duration.
//!
//! Shift times arrive as `"HH:MM"` strings straight from the quote editor,
//! where fields are frequently empty mid-edit. Both functions here are
//! total: empty or malformed input contributes zero hours rather than an
//! error.

use rust_decimal::Decimal;

use super::rounding::round2;

/// Hours added when a shift finishes on the following day.
const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Parses an `"HH:MM"` clock time into fractional hours.
fn parse_clock(time: &str) -> Option<Decimal> {
    let (hours, minutes) = time.trim().split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    Some(Decimal::from(hours) + Decimal::from(minutes) / Decimal::from(60))
}

/// Converts an `"HH:MM"` clock time to fractional hours since midnight.
///
/// Empty or malformed input yields zero. The result is not rounded; callers
/// round differences, not raw clock positions.
///
/// # Example
///
/// ```
/// use shiftcost_engine::calculation::clock_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(clock_hours("06:30"), Decimal::from_str("6.5").unwrap());
/// assert_eq!(clock_hours(""), Decimal::ZERO);
/// assert_eq!(clock_hours("not a time"), Decimal::ZERO);
/// ```
pub fn clock_hours(time: &str) -> Decimal {
    parse_clock(time).unwrap_or(Decimal::ZERO)
}

/// Computes the elapsed hours between two `"HH:MM"` clock times.
///
/// A negative difference means the shift crossed midnight, so 24 hours are
/// added. A single wrap only: shifts longer than 24 hours are not
/// representable in this form. If either time is empty or malformed the
/// duration is zero. The result is rounded to 2 decimal places.
///
/// # Example
///
/// ```
/// use shiftcost_engine::calculation::shift_duration;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(shift_duration("06:00", "18:00"), Decimal::from_str("12").unwrap());
/// assert_eq!(shift_duration("22:00", "02:00"), Decimal::from_str("4").unwrap());
/// assert_eq!(shift_duration("", "10:00"), Decimal::ZERO);
/// ```
pub fn shift_duration(start: &str, finish: &str) -> Decimal {
    let (Some(start), Some(finish)) = (parse_clock(start), parse_clock(finish)) else {
        return Decimal::ZERO;
    };

    let mut diff = finish - start;
    if diff < Decimal::ZERO {
        diff += HOURS_PER_DAY;
    }
    round2(diff)
}
