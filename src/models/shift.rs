//! Shift model and related types.
//!
//! This module defines the Shift struct and the DayType enum used to select
//! which rate and compensation rule applies to a day's work.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The type of day a shift falls on.
///
/// Determines which rate and compensation rule applies: weekdays split
/// hours into normal time and overtime around the daily cap, while weekends
/// and public holidays bill every hour at a single flat rate.
///
/// # Example
///
/// ```
/// use shiftcost_engine::models::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(format!("{:?}", day_type), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday - normal time / overtime split applies.
    #[default]
    Weekday,
    /// Saturday or Sunday - single weekend rate for all hours.
    Weekend,
    /// Public holiday - single public holiday rate for all hours.
    PublicHoliday,
}

impl DayType {
    /// Derives the day type for a calendar date.
    ///
    /// The public holiday flag is an explicit caller-supplied override and
    /// always wins; otherwise Saturday and Sunday map to [`DayType::Weekend`]
    /// and everything else to [`DayType::Weekday`].
    ///
    /// # Example
    ///
    /// ```
    /// use shiftcost_engine::models::DayType;
    /// use chrono::NaiveDate;
    ///
    /// // 2026-01-17 is a Saturday
    /// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
    /// assert_eq!(DayType::for_date(saturday, false), DayType::Weekend);
    ///
    /// // 2026-01-26 is a Monday, but declared a public holiday
    /// let monday = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
    /// assert_eq!(DayType::for_date(monday, true), DayType::PublicHoliday);
    /// assert_eq!(DayType::for_date(monday, false), DayType::Weekday);
    /// ```
    pub fn for_date(date: NaiveDate, is_public_holiday: bool) -> Self {
        if is_public_holiday {
            return DayType::PublicHoliday;
        }
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayType::Weekend,
            _ => DayType::Weekday,
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::PublicHoliday => write!(f, "Public holiday"),
        }
    }
}

/// One technician's scheduled work block for one day, including travel.
///
/// Time fields are local clock times in `"HH:MM"` form; an empty string
/// means the field has not been filled in yet and contributes zero hours.
/// Numeric and boolean fields default when absent, so a partially edited
/// shift always deserializes and always costs something sensible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Identifier for the shift, unique within the enclosing quote.
    pub id: u32,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The day type, typically derived via [`DayType::for_date`].
    #[serde(default)]
    pub day_type: DayType,
    /// The technician assigned to the shift.
    #[serde(default)]
    pub tech: String,
    /// On-site start time as `"HH:MM"`, or empty if unset.
    #[serde(default)]
    pub start_time: String,
    /// On-site finish time as `"HH:MM"`, or empty if unset.
    #[serde(default)]
    pub finish_time: String,
    /// Travel hours immediately before the on-site window.
    #[serde(default)]
    pub travel_in: Decimal,
    /// Travel hours immediately after the on-site window.
    #[serde(default)]
    pub travel_out: Decimal,
    /// Whether the per-day vehicle allowance applies.
    #[serde(default)]
    pub vehicle: bool,
    /// Whether the per-night per-diem allowance applies.
    #[serde(default)]
    pub per_diem: bool,
    /// Weekday-only modifier that bills every hour as overtime.
    #[serde(default)]
    pub is_night_shift: bool,
}
