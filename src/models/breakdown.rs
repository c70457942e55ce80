//! Shift breakdown models.
//!
//! The breakdown is the six-bucket hour classification used to itemize a
//! shift's cost on quotes and invoices: normal-time and overtime buckets for
//! each of the travel-in, on-site and travel-out phases.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The six-bucket hour classification for one shift.
///
/// Weekday day shifts distribute hours between the NT and OT buckets around
/// the daily normal-time cap. Night shifts put everything in the OT buckets.
/// Weekend and public holiday shifts bill at a single flat rate and store
/// all hours in the NT buckets.
///
/// Every bucket is rounded to 2 decimal places. Whatever the day type, the
/// six buckets always sum to `travel_in + site_hours + travel_out`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftBreakdown {
    /// Travel-in hours billed at normal time.
    pub travel_in_nt: Decimal,
    /// Travel-in hours billed at overtime.
    pub travel_in_ot: Decimal,
    /// On-site hours billed at normal time.
    pub site_nt: Decimal,
    /// On-site hours billed at overtime.
    pub site_ot: Decimal,
    /// Travel-out hours billed at normal time.
    pub travel_out_nt: Decimal,
    /// Travel-out hours billed at overtime.
    pub travel_out_ot: Decimal,
    /// Raw duration between start and finish time (wraps past midnight).
    pub total_hours: Decimal,
    /// `total_hours` minus travel, floored at zero.
    pub site_hours: Decimal,
}

impl ShiftBreakdown {
    /// Returns the total compensated hours: the sum of all six buckets.
    pub fn compensated_hours(&self) -> Decimal {
        self.travel_in_nt
            + self.travel_in_ot
            + self.site_nt
            + self.site_ot
            + self.travel_out_nt
            + self.travel_out_ot
    }

    /// Returns the hours billed at normal time.
    pub fn normal_time_hours(&self) -> Decimal {
        self.travel_in_nt + self.site_nt + self.travel_out_nt
    }

    /// Returns the hours billed at overtime.
    pub fn overtime_hours(&self) -> Decimal {
        self.travel_in_ot + self.site_ot + self.travel_out_ot
    }
}

/// The complete derived result for one shift.
///
/// Recomputed on demand whenever the shift or the rate card changes; it has
/// no lifecycle of its own and is never persisted independently of its
/// source shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedShift {
    /// The total cost of the shift including allowances.
    pub cost: Decimal,
    /// The hour classification behind the cost.
    pub breakdown: ShiftBreakdown,
}
