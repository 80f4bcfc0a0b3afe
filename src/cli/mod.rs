//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the core engine. Everything boundary-flavored
//! lives here: file writing, link construction, percent-encoding.

pub mod catalog;
pub mod days;
pub mod link;
pub mod quote;

pub use catalog::handle_catalog_command;
pub use days::{handle_days_command, DaysArgs};
pub use link::{percent_encode, whatsapp_link};
pub use quote::{handle_quote_command, QuoteArgs};
