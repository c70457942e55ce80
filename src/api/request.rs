//! Request types for the Shift Cost Engine API.
//!
//! This module defines the JSON request structures for the `/quote` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DayType, Extra, Quote, RateCard, Shift};

/// Request body for the `/quote` endpoint.
///
/// Rates resolve in order: inline `rates` when present, then the named
/// `rate_card`, then the configured default card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The customer the quote is for.
    #[serde(default)]
    pub customer: String,
    /// The name of a configured rate card to cost against.
    #[serde(default)]
    pub rate_card: Option<String>,
    /// Inline rates overriding any configured card.
    #[serde(default)]
    pub rates: Option<RateCard>,
    /// The shifts to cost.
    pub shifts: Vec<ShiftRequest>,
    /// Flat extra charges on top of labour.
    #[serde(default)]
    pub extras: Vec<ExtraRequest>,
}

/// Shift information in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Identifier for the shift, unique within the quote.
    pub id: u32,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The day type; defaults to weekday when absent.
    #[serde(default)]
    pub day_type: DayType,
    /// The technician assigned to the shift.
    #[serde(default)]
    pub tech: String,
    /// On-site start time as `"HH:MM"`.
    #[serde(default)]
    pub start_time: String,
    /// On-site finish time as `"HH:MM"`.
    #[serde(default)]
    pub finish_time: String,
    /// Travel hours before the on-site window.
    #[serde(default)]
    pub travel_in: Decimal,
    /// Travel hours after the on-site window.
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

/// Extra charge information in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraRequest {
    /// Human-readable description of the charge.
    #[serde(default)]
    pub description: String,
    /// The flat amount charged.
    #[serde(default)]
    pub amount: Decimal,
}

impl From<ShiftRequest> for Shift {
    fn from(req: ShiftRequest) -> Self {
        Shift {
            id: req.id,
            date: req.date,
            day_type: req.day_type,
            tech: req.tech,
            start_time: req.start_time,
            finish_time: req.finish_time,
            travel_in: req.travel_in,
            travel_out: req.travel_out,
            vehicle: req.vehicle,
            per_diem: req.per_diem,
            is_night_shift: req.is_night_shift,
        }
    }
}

impl From<ExtraRequest> for Extra {
    fn from(req: ExtraRequest) -> Self {
        Extra {
            description: req.description,
            amount: req.amount,
        }
    }
}

impl QuoteRequest {
    /// Converts the request into a domain [`Quote`] costed against the
    /// given rate card name.
    pub fn into_quote(self, rate_card: String) -> Quote {
        Quote {
            customer: self.customer,
            rate_card,
            shifts: self.shifts.into_iter().map(Into::into).collect(),
            extras: self.extras.into_iter().map(Into::into).collect(),
        }
    }
}
