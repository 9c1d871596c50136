//! Utility functions module
//!
//! Contains helpers for currency formatting and for parsing the amounts,
//! month counts and dates users type into forms.

pub mod currency;

// Re-export commonly used functions
pub use currency::{
    format_currency, format_monthly_plan, format_percent, format_time_left, parse_amount,
    parse_date, parse_months, CURRENCY_SYMBOL, DATE_FORMAT,
};
