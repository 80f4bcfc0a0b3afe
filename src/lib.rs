//! Padoca - Order-budgeting calculator for a small bakery
//!
//! This library computes order quotes: the user picks products and
//! quantities, selects a date range (optionally dropping weekends and
//! specific days), and the engine produces per-item totals and a grand
//! total, with a formatted table, an order message, and CSV/JSON/YAML
//! exports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (catalog, selections, calendar, quote)
//! - `services`: Pure business logic (resolver, engine, session)
//! - `report`: Table and order-message formatting
//! - `export`: CSV/JSON/YAML serialization
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use padoca::models::DateRange;
//! use padoca::services::OrderSession;
//!
//! let mut session = OrderSession::with_default_catalog();
//! session.select("Pão Francês", 2)?;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let result = session.quote(&DateRange::single(day), false, &[])?;
//! assert_eq!(result.grand_total.to_string(), "R$3,00");
//! # Ok::<(), padoca::PadocaError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod report;
pub mod services;

pub use error::{PadocaError, PadocaResult};
