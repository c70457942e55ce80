//! HTTP request handlers for the Shift Cost Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{allowance_total, calculate_quote_total, calculate_shift_breakdown};
use crate::error::QuoteError;
use crate::models::{Quote, RateCard};

use super::request::QuoteRequest;
use super::response::{ApiError, ApiErrorResponse, QuoteResponse, QuoteTotals, ShiftCostLine};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .with_state(state)
}

/// Handler for POST /quote endpoint.
///
/// Accepts a quote request and returns per-shift cost lines plus totals.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Resolve the rates: inline rates win over a named card, which wins
    // over the configured default
    let config = state.config();
    let (card_name, rates) = match (&request.rates, &request.rate_card) {
        (Some(rates), _) => ("inline".to_string(), rates.clone()),
        (None, Some(name)) => match config.rate_card(name) {
            Ok(card) => (name.clone(), card.clone()),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    rate_card = %name,
                    "Rate card not found"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
        },
        (None, None) => {
            let name = config.config().metadata().default_card.clone();
            match config.default_rate_card() {
                Ok(card) => (name, card.clone()),
                Err(err) => {
                    let api_error: ApiErrorResponse = err.into();
                    return (
                        api_error.status,
                        [(header::CONTENT_TYPE, "application/json")],
                        Json(api_error.error),
                    )
                        .into_response();
                }
            }
        }
    };

    let quote = request.into_quote(card_name);

    if quote.has_duplicate_shift_ids() {
        warn!(correlation_id = %correlation_id, "Duplicate shift ids in quote");
        let api_error: ApiErrorResponse = QuoteError::InvalidQuote {
            message: "shift ids must be unique within a quote".to_string(),
        }
        .into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // Perform the calculation
    let start_time = Instant::now();
    let response = build_quote_response(&quote, &rates);
    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        customer = %quote.customer,
        shifts_count = quote.shifts.len(),
        grand_total = %response.totals.grand_total,
        duration_us = duration.as_micros(),
        "Quote calculated successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Builds the quote response: per-shift cost lines plus totals.
fn build_quote_response(quote: &Quote, rates: &RateCard) -> QuoteResponse {
    let mut shift_costs = Vec::with_capacity(quote.shifts.len());
    let mut total_hours = Decimal::ZERO;
    let mut shifts_total = Decimal::ZERO;
    let mut allowances_total = Decimal::ZERO;

    for shift in &quote.shifts {
        let calculated = calculate_shift_breakdown(shift, rates);
        total_hours += calculated.breakdown.compensated_hours();
        shifts_total += calculated.cost;
        allowances_total += allowance_total(shift, rates);

        shift_costs.push(ShiftCostLine {
            shift_id: shift.id,
            date: shift.date,
            day_type: shift.day_type,
            tech: shift.tech.clone(),
            cost: calculated.cost,
            breakdown: calculated.breakdown,
        });
    }

    QuoteResponse {
        quote_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        customer: quote.customer.clone(),
        rate_card: quote.rate_card.clone(),
        shift_costs,
        totals: QuoteTotals {
            total_hours,
            labour_total: shifts_total - allowances_total,
            allowances_total,
            extras_total: quote.extras_total(),
            grand_total: calculate_quote_total(quote, rates),
        },
    }
}
