//! Report formatting for computed quotes
//!
//! Renders a `BudgetResult` three ways: currency-formatted table rows
//! (shared with export), a width-aligned text table, and the plain-text
//! order message. Currency formatting is always the locale-independent
//! `Money` display; the host locale is never consulted.

pub mod message;
pub mod table;

pub use message::order_message;
pub use table::{format_quote_table, quote_rows, QuoteRow, QUOTE_COLUMNS};
