//! Calculation logic for the Shift Cost Engine.
//!
//! This module contains the pure costing functions: clock-time duration
//! parsing, the weekday normal-time cap split, the per-shift cost breakdown
//! across all day types, flat allowances, and quote total aggregation.

mod allowances;
mod breakdown;
mod duration;
mod quote_total;
mod rounding;
mod weekday;

pub use allowances::allowance_total;
pub use breakdown::calculate_shift_breakdown;
pub use duration::{clock_hours, shift_duration};
pub use quote_total::calculate_quote_total;
pub use rounding::round2;
pub use weekday::{NORMAL_TIME_CAP, NormalTimeSplit, split_normal_time};
