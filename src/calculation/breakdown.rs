//! Per-shift cost breakdown.
//!
//! [`calculate_shift_breakdown`] is the core of the engine: a pure, total
//! function from a shift and a rate card to a cost and a six-bucket hour
//! classification. It never fails, holds no state and performs no I/O, so
//! it is safe to recompute on every edit of a quote.

use rust_decimal::Decimal;

use crate::models::{CalculatedShift, DayType, RateCard, Shift, ShiftBreakdown};

use super::allowances::allowance_total;
use super::duration::shift_duration;
use super::rounding::round2;
use super::weekday::split_normal_time;

/// Calculates the cost and hour breakdown for one shift.
///
/// Branches on day type:
/// - **Weekday night shift**: the normal-time cap does not apply; travel and
///   site hours all land in the overtime buckets at the overtime rate.
/// - **Weekday day shift**: the 7.5 hour normal-time allowance is consumed
///   chronologically (travel-in, site, travel-out); the remainder is
///   overtime.
/// - **Weekend / public holiday**: no split, every hour bills at the single
///   flat rate for that day type and is stored in the normal-time buckets.
///   The night-shift flag is ignored on these day types.
///
/// Vehicle and per-diem allowances are added afterwards regardless of day
/// type. Every hour quantity is rounded to 2 decimal places before it is
/// multiplied by a rate or summed with another, so invoice figures are
/// reproducible to the cent.
///
/// # Example
///
/// ```
/// use shiftcost_engine::calculation::calculate_shift_breakdown;
/// use shiftcost_engine::models::{DayType, RateCard, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let rates = RateCard {
///     site_normal: dec("95.00"),
///     site_overtime: dec("142.50"),
///     ..RateCard::default()
/// };
/// let shift = Shift {
///     id: 1,
///     date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     day_type: DayType::Weekday,
///     tech: "J. Moreau".to_string(),
///     start_time: "06:00".to_string(),
///     finish_time: "15:00".to_string(),
///     travel_in: dec("1.0"),
///     travel_out: Decimal::ZERO,
///     vehicle: false,
///     per_diem: false,
///     is_night_shift: false,
/// };
///
/// let result = calculate_shift_breakdown(&shift, &rates);
/// // 1h travel + 6.5h site at normal time, 1.5h site at overtime
/// assert_eq!(result.breakdown.site_nt, dec("6.50"));
/// assert_eq!(result.breakdown.site_ot, dec("1.50"));
/// assert_eq!(result.cost, dec("926.25"));
/// ```
pub fn calculate_shift_breakdown(shift: &Shift, rates: &RateCard) -> CalculatedShift {
    let total_hours = shift_duration(&shift.start_time, &shift.finish_time);
    let travel_in = round2(shift.travel_in);
    let travel_out = round2(shift.travel_out);
    // Travel beyond the clocked window simply zeroes site time, never errors
    let site_hours = round2((total_hours - travel_in - travel_out).max(Decimal::ZERO));

    let mut breakdown = ShiftBreakdown {
        total_hours,
        site_hours,
        ..ShiftBreakdown::default()
    };

    let labour = match shift.day_type {
        DayType::Weekday if shift.is_night_shift => {
            breakdown.travel_in_ot = travel_in;
            breakdown.site_ot = site_hours;
            breakdown.travel_out_ot = travel_out;
            (travel_in + site_hours + travel_out) * rates.site_overtime
        }
        DayType::Weekday => {
            let split = split_normal_time(travel_in, site_hours, travel_out);
            breakdown.travel_in_nt = split.travel_in_nt;
            breakdown.travel_in_ot = split.travel_in_ot;
            breakdown.site_nt = split.site_nt;
            breakdown.site_ot = split.site_ot;
            breakdown.travel_out_nt = split.travel_out_nt;
            breakdown.travel_out_ot = split.travel_out_ot;
            breakdown.normal_time_hours() * rates.site_normal
                + breakdown.overtime_hours() * rates.site_overtime
        }
        DayType::Weekend => {
            breakdown.travel_in_nt = travel_in;
            breakdown.site_nt = site_hours;
            breakdown.travel_out_nt = travel_out;
            (site_hours + travel_in + travel_out) * rates.weekend
        }
        DayType::PublicHoliday => {
            breakdown.travel_in_nt = travel_in;
            breakdown.site_nt = site_hours;
            breakdown.travel_out_nt = travel_out;
            (site_hours + travel_in + travel_out) * rates.public_holiday
        }
    };

    let cost = round2(labour + allowance_total(shift, rates));

    CalculatedShift { cost, breakdown }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_rates() -> RateCard {
        RateCard {
            site_normal: dec("95.00"),
            site_overtime: dec("142.50"),
            weekend: dec("142.50"),
            public_holiday: dec("190.00"),
            vehicle: dec("85.00"),
            per_diem: dec("120.00"),
        }
    }

    fn make_shift(day_type: DayType, start: &str, finish: &str) -> Shift {
        Shift {
            id: 1,
            date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
            day_type,
            tech: "J. Moreau".to_string(),
            start_time: start.to_string(),
            finish_time: finish.to_string(),
            travel_in: Decimal::ZERO,
            travel_out: Decimal::ZERO,
            vehicle: false,
            per_diem: false,
            is_night_shift: false,
        }
    }

    /// BD-001: weekday shift entirely within the normal-time cap
    #[test]
    fn test_weekday_within_cap() {
        let shift = make_shift(DayType::Weekday, "06:00", "12:00");

        let result = calculate_shift_breakdown(&shift, &make_rates());
        assert_eq!(result.breakdown.site_nt, dec("6.00"));
        assert_eq!(result.breakdown.site_ot, dec("0.00"));
        assert_eq!(result.cost, dec("6.00") * dec("95.00"));
    }

    /// BD-002: cap spillover across travel and site phases
    #[test]
    fn test_weekday_cap_spillover() {
        let mut shift = make_shift(DayType::Weekday, "06:00", "15:00");
        shift.travel_in = dec("1.0");

        let result = calculate_shift_breakdown(&shift, &make_rates());
        assert_eq!(result.breakdown.total_hours, dec("9"));
        assert_eq!(result.breakdown.site_hours, dec("8.00"));
        assert_eq!(result.breakdown.travel_in_nt, dec("1.00"));
        assert_eq!(result.breakdown.site_nt, dec("6.50"));
        assert_eq!(result.breakdown.site_ot, dec("1.50"));
        // (1.0 + 6.5) * 95.00 + 1.5 * 142.50
        assert_eq!(result.cost, dec("926.25"));
    }

    /// BD-003: night shift removes the normal-time split entirely
    #[test]
    fn test_night_shift_all_overtime() {
        let mut shift = make_shift(DayType::Weekday, "06:00", "15:00");
        shift.travel_in = dec("1.0");
        shift.is_night_shift = true;

        let result = calculate_shift_breakdown(&shift, &make_rates());
        assert_eq!(result.breakdown.site_nt, dec("0"));
        assert_eq!(result.breakdown.travel_in_nt, dec("0"));
        assert_eq!(result.breakdown.travel_in_ot, dec("1.00"));
        assert_eq!(result.breakdown.site_ot, dec("8.00"));
        // 9.0 * 142.50
        assert_eq!(result.cost, dec("1282.50"));
    }

    /// BD-004: weekend flat rate ignores the cap
    #[test]
    fn test_weekend_flat_rate() {
        let mut shift = make_shift(DayType::Weekend, "07:00", "17:00");
        shift.travel_in = dec("1.0");
        shift.travel_out = dec("1.0");

        let result = calculate_shift_breakdown(&shift, &make_rates());
        assert_eq!(result.breakdown.site_hours, dec("8.00"));
        assert_eq!(result.breakdown.site_nt, dec("8.00"));
        assert_eq!(result.breakdown.travel_in_nt, dec("1.00"));
        assert_eq!(result.breakdown.travel_out_nt, dec("1.00"));
        // 10 hours * 142.50
        assert_eq!(result.cost, dec("1425.00"));
    }

    /// BD-005: public holiday flat rate
    #[test]
    fn test_public_holiday_flat_rate() {
        let mut shift = make_shift(DayType::PublicHoliday, "07:00", "17:00");
        shift.travel_in = dec("1.0");
        shift.travel_out = dec("1.0");

        let result = calculate_shift_breakdown(&shift, &make_rates());
        // 10 hours * 190.00
        assert_eq!(result.cost, dec("1900.00"));
    }

    /// BD-006: night-shift flag ignored outside weekdays
    #[test]
    fn test_night_shift_flag_ignored_on_weekend() {
        let mut shift = make_shift(DayType::Weekend, "07:00", "17:00");
        shift.is_night_shift = true;

        let result = calculate_shift_breakdown(&shift, &make_rates());
        assert_eq!(result.cost, dec("10") * dec("142.50"));
        assert_eq!(result.breakdown.site_nt, dec("10.00"));
    }

    /// BD-007: allowances are flat and additive on any day type
    #[test]
    fn test_allowances_additive() {
        let rates = make_rates();
        for day_type in [DayType::Weekday, DayType::Weekend, DayType::PublicHoliday] {
            let base = make_shift(day_type, "08:00", "12:00");
            let bare = calculate_shift_breakdown(&base, &rates).cost;

            let mut with_vehicle = base.clone();
            with_vehicle.vehicle = true;
            assert_eq!(
                calculate_shift_breakdown(&with_vehicle, &rates).cost,
                bare + dec("85.00")
            );

            let mut with_both = with_vehicle.clone();
            with_both.per_diem = true;
            assert_eq!(
                calculate_shift_breakdown(&with_both, &rates).cost,
                bare + dec("85.00") + dec("120.00")
            );
        }
    }

    /// BD-008: travel exceeding the clocked window floors site hours at zero
    #[test]
    fn test_travel_exceeding_duration_zeroes_site() {
        let mut shift = make_shift(DayType::Weekday, "09:00", "11:00");
        shift.travel_in = dec("2.0");
        shift.travel_out = dec("1.0");

        let result = calculate_shift_breakdown(&shift, &make_rates());
        assert_eq!(result.breakdown.site_hours, Decimal::ZERO);
        assert_eq!(result.breakdown.travel_in_nt, dec("2.00"));
        assert_eq!(result.breakdown.travel_out_nt, dec("1.00"));
        // Only the 3 travel hours bill, at normal time
        assert_eq!(result.cost, dec("3") * dec("95.00"));
        assert!(result.cost >= Decimal::ZERO);
    }

    /// BD-009: empty clock times mean zero duration but travel still bills
    #[test]
    fn test_empty_times_bill_travel_only() {
        let mut shift = make_shift(DayType::Weekday, "", "");
        shift.travel_in = dec("1.5");

        let result = calculate_shift_breakdown(&shift, &make_rates());
        assert_eq!(result.breakdown.total_hours, Decimal::ZERO);
        assert_eq!(result.breakdown.site_hours, Decimal::ZERO);
        assert_eq!(result.cost, dec("1.5") * dec("95.00"));
    }

    /// BD-010: midnight wrap flows through to the breakdown
    #[test]
    fn test_midnight_wrap_duration() {
        let shift = make_shift(DayType::Weekday, "22:00", "02:00");

        let result = calculate_shift_breakdown(&shift, &make_rates());
        assert_eq!(result.breakdown.total_hours, dec("4"));
        assert_eq!(result.breakdown.site_nt, dec("4.00"));
    }

    /// BD-011: a zero rate card costs nothing but still classifies hours
    #[test]
    fn test_zero_rate_card() {
        let shift = make_shift(DayType::Weekday, "06:00", "18:00");

        let result = calculate_shift_breakdown(&shift, &RateCard::default());
        assert_eq!(result.cost, Decimal::ZERO);
        assert_eq!(result.breakdown.site_nt, dec("7.50"));
        assert_eq!(result.breakdown.site_ot, dec("4.50"));
    }

    /// BD-012: fractional travel hours round before the rate multiply
    #[test]
    fn test_fractional_travel_rounds_before_multiply() {
        let mut shift = make_shift(DayType::Weekend, "08:00", "16:00");
        shift.travel_in = dec("1.3333333");

        let result = calculate_shift_breakdown(&shift, &make_rates());
        assert_eq!(result.breakdown.travel_in_nt, dec("1.33"));
        // (6.67 + 1.33) * 142.50, with travel rounded first
        assert_eq!(result.cost, dec("8") * dec("142.50"));
    }

    fn conservation_holds(shift: &Shift) -> bool {
        let result = calculate_shift_breakdown(shift, &make_rates());
        let expected = round2(shift.travel_in)
            + result.breakdown.site_hours
            + round2(shift.travel_out);
        result.breakdown.compensated_hours() == expected
    }

    proptest! {
        /// The six buckets always reconstruct total compensated hours,
        /// whatever the day type, flags or hour quantities.
        #[test]
        fn prop_bucket_conservation(
            day_type_idx in 0usize..3,
            is_night in proptest::bool::ANY,
            start_h in 0u32..24, start_m in 0u32..60,
            len_minutes in 0u32..(24 * 60),
            travel_in_cents in 0u32..1200,
            travel_out_cents in 0u32..1200,
        ) {
            let day_type = [DayType::Weekday, DayType::Weekend, DayType::PublicHoliday][day_type_idx];
            let finish_total = (start_h * 60 + start_m + len_minutes) % (24 * 60);
            let mut shift = make_shift(
                day_type,
                &format!("{:02}:{:02}", start_h, start_m),
                &format!("{:02}:{:02}", finish_total / 60, finish_total % 60),
            );
            shift.is_night_shift = is_night;
            shift.travel_in = Decimal::new(travel_in_cents as i64, 2);
            shift.travel_out = Decimal::new(travel_out_cents as i64, 2);

            prop_assert!(conservation_holds(&shift));
        }
    }

    #[test]
    fn test_bucket_conservation_spot_checks() {
        let mut spill = make_shift(DayType::Weekday, "06:00", "15:00");
        spill.travel_in = dec("1.0");
        assert!(conservation_holds(&spill));

        let mut weekend = make_shift(DayType::Weekend, "07:00", "17:00");
        weekend.travel_in = dec("1.0");
        weekend.travel_out = dec("1.0");
        assert!(conservation_holds(&weekend));

        let mut night = make_shift(DayType::Weekday, "18:00", "04:00");
        night.is_night_shift = true;
        night.travel_out = dec("0.75");
        assert!(conservation_holds(&night));
    }
}
