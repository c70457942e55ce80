//! Core data models for the Shift Cost Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod quote;
mod rates;
mod shift;

pub use breakdown::{CalculatedShift, ShiftBreakdown};
pub use quote::{Extra, Quote};
pub use rates::RateCard;
pub use shift::{DayType, Shift};
