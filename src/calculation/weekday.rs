//! Weekday normal-time cap split.
//!
//! On a standard weekday day shift, a single 7.5 hour normal-time allowance
//! is consumed in chronological order: travel-in first, then on-site hours,
//! then travel-out. Hours under the cap bill at the normal rate; whatever
//! spills over bills at overtime. The order is load-bearing: it decides
//! which phase's hours fall under the cap.

use rust_decimal::Decimal;

use super::rounding::round2;

/// The daily normal-time allowance in hours for weekday day shifts.
pub const NORMAL_TIME_CAP: Decimal = Decimal::from_parts(75, 0, 0, false, 1);

/// The normal-time / overtime split of a weekday day shift.
///
/// Each field is rounded to 2 decimal places. For every phase,
/// `nt + ot` equals the phase's input hours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalTimeSplit {
    /// Travel-in hours under the cap.
    pub travel_in_nt: Decimal,
    /// Travel-in hours over the cap.
    pub travel_in_ot: Decimal,
    /// On-site hours under the cap.
    pub site_nt: Decimal,
    /// On-site hours over the cap.
    pub site_ot: Decimal,
    /// Travel-out hours under the cap.
    pub travel_out_nt: Decimal,
    /// Travel-out hours over the cap.
    pub travel_out_ot: Decimal,
}

/// Splits one phase against the remaining cap headroom.
///
/// The normal-time portion is clamped to `[0, cap - consumed]`; the rest of
/// the phase is overtime.
fn cap_phase(hours: Decimal, consumed: Decimal) -> (Decimal, Decimal) {
    let headroom = (NORMAL_TIME_CAP - consumed).max(Decimal::ZERO);
    let nt = hours.min(headroom).max(Decimal::ZERO);
    let ot = hours - nt;
    (round2(nt), round2(ot))
}

/// Distributes a weekday day shift's hours around the normal-time cap.
///
/// Phases are consumed chronologically (travel-in, site, travel-out) and the
/// running total advances by each phase's *unclamped* duration so the cap
/// exhausts correctly across phases.
///
/// # Example
///
/// ```
/// use shiftcost_engine::calculation::split_normal_time;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// // 1h travel + 8h site: the 7.5h cap covers the travel and 6.5h of site
/// let split = split_normal_time(dec("1.0"), dec("8.0"), dec("0"));
/// assert_eq!(split.travel_in_nt, dec("1.00"));
/// assert_eq!(split.site_nt, dec("6.50"));
/// assert_eq!(split.site_ot, dec("1.50"));
/// ```
pub fn split_normal_time(
    travel_in: Decimal,
    site_hours: Decimal,
    travel_out: Decimal,
) -> NormalTimeSplit {
    let mut consumed = Decimal::ZERO;

    let (travel_in_nt, travel_in_ot) = cap_phase(travel_in, consumed);
    consumed += travel_in;

    let (site_nt, site_ot) = cap_phase(site_hours, consumed);
    consumed += site_hours;

    let (travel_out_nt, travel_out_ot) = cap_phase(travel_out, consumed);

    NormalTimeSplit {
        travel_in_nt,
        travel_in_ot,
        site_nt,
        site_ot,
        travel_out_nt,
        travel_out_ot,
    }
}
