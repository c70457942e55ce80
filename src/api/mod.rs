//! HTTP API module for the Shift Cost Engine.
//!
//! This module provides the REST API endpoint for costing a quote's shifts
//! against a configured or inline rate card.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::QuoteRequest;
pub use response::{ApiError, QuoteResponse, QuoteTotals, ShiftCostLine};
pub use state::AppState;
