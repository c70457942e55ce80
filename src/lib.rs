//! Shift Cost Engine for field maintenance service quoting.
//!
//! This crate calculates the cost of a technician's shift from configured
//! rate cards. Weekday shifts split hours into normal time and overtime
//! around a 7.5 hour daily cap consumed in chronological order; weekend and
//! public holiday shifts bill every hour at a single flat rate. Vehicle and
//! per-diem allowances are added on top. Quote totals sum the per-shift
//! costs plus any flat extras.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
