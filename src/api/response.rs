//! Response types for the Shift Cost Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QuoteError;
use crate::models::{DayType, ShiftBreakdown};

/// Response body for a successful `/quote` calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Unique identifier for this quote calculation.
    pub quote_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The customer the quote is for.
    pub customer: String,
    /// The rate card the quote was costed against, or "inline".
    pub rate_card: String,
    /// Per-shift cost lines.
    pub shift_costs: Vec<ShiftCostLine>,
    /// Aggregated totals for the quote.
    pub totals: QuoteTotals,
}

/// One shift's cost line in a quote response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftCostLine {
    /// The id of the shift this line was calculated from.
    pub shift_id: u32,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The day type the shift was billed as.
    pub day_type: DayType,
    /// The technician assigned to the shift.
    pub tech: String,
    /// The total cost of the shift including allowances.
    pub cost: Decimal,
    /// The six-bucket hour classification behind the cost.
    pub breakdown: ShiftBreakdown,
}

/// Aggregated totals for a quote calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// Total compensated hours across all shifts.
    pub total_hours: Decimal,
    /// Labour cost excluding allowances and extras.
    pub labour_total: Decimal,
    /// Total of vehicle and per-diem allowances.
    pub allowances_total: Decimal,
    /// Total of flat extras.
    pub extras_total: Decimal,
    /// The invoice total: labour + allowances + extras.
    pub grand_total: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a rate card not found error response.
    pub fn rate_card_not_found(name: &str) -> Self {
        Self::with_details(
            "RATE_CARD_NOT_FOUND",
            format!("Rate card not found: {}", name),
            format!("No rate card named '{}' is configured", name),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<QuoteError> for ApiErrorResponse {
    fn from(error: QuoteError) -> Self {
        match error {
            QuoteError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            QuoteError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            QuoteError::RateCardNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::rate_card_not_found(&name),
            },
            QuoteError::InvalidQuote { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_QUOTE",
                    format!("Invalid quote: {}", message),
                    "The quote data contains invalid information",
                ),
            },
        }
    }
}
