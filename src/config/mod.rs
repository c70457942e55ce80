//! Configuration loading and management for the Shift Cost Engine.
//!
//! This module provides functionality to load rate card configuration from
//! YAML files: named rate cards, the default card selection, and pricing
//! metadata.
//!
//! # Example
//!
//! ```no_run
//! use shiftcost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded rates: {}", config.config().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RatesConfig, RatesMetadata};
