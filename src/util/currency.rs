//! Currency formatting and input parsing utilities
//!
//! Amounts are displayed in rupees with Indian digit grouping
//! (`₹2,40,081.00`). Parsing turns raw form text into validated values.

use crate::goal::{TimeLeft, ValidationError};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub const CURRENCY_SYMBOL: &str = "₹";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format an amount with the rupee symbol, two decimals and Indian grouping
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use savemate::util::currency::format_currency;
///
/// assert_eq!(format_currency(Decimal::new(240081, 0)), "₹2,40,081.00");
/// assert_eq!(format_currency(Decimal::new(50000, 1)), "₹5,000.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    format!(
        "{}{}{}.{:0<2}",
        if negative { "-" } else { "" },
        CURRENCY_SYMBOL,
        group_indian(int_part),
        frac_part
    )
}

/// Group digits the Indian way: last three, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a monthly saving plan, e.g. `₹5,000.00/month`
pub fn format_monthly_plan(value: Decimal) -> String {
    format!("{}/month", format_currency(value))
}

/// Format the time left until the target date
pub fn format_time_left(time_left: TimeLeft) -> String {
    match time_left {
        TimeLeft::Days(1) => "1 day left".to_string(),
        TimeLeft::Days(days) => format!("{} days left", days),
        TimeLeft::Reached => "Target date reached".to_string(),
    }
}

/// Format a progress ratio as a whole percentage
pub fn format_percent(ratio: f64) -> String {
    let percent = (ratio.clamp(0.0, 1.0) * 100.0).round() as u32;
    format!("{}% Complete", percent)
}

/// Parse a positive money amount typed by the user
///
/// A leading `₹` and `,` group separators are tolerated.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use savemate::util::currency::parse_amount;
///
/// assert_eq!(parse_amount("target amount", "50,000").unwrap(), Decimal::new(50000, 0));
/// assert!(parse_amount("deposit", "-5").is_err());
/// ```
pub fn parse_amount(field: &'static str, input: &str) -> Result<Decimal, ValidationError> {
    let trimmed = input.trim();
    let cleaned: String = trimmed
        .trim_start_matches(CURRENCY_SYMBOL)
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    let value = Decimal::from_str(&cleaned).map_err(|_| ValidationError::NotNumeric {
        field,
        input: trimmed.to_string(),
    })?;

    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(field));
    }

    Ok(value)
}

/// Parse a positive whole number of months
pub fn parse_months(input: &str) -> Result<u32, ValidationError> {
    const FIELD: &str = "duration in months";
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(FIELD));
    }

    let months: i64 = trimmed.parse().map_err(|_| ValidationError::NotNumeric {
        field: FIELD,
        input: trimmed.to_string(),
    })?;

    if months <= 0 {
        return Err(ValidationError::NotPositive(FIELD));
    }

    u32::try_from(months).map_err(|_| ValidationError::TooLarge(FIELD))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("target date"));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Decimal::ZERO), "₹0.00");
        assert_eq!(format_currency(dec("420")), "₹420.00");
        assert_eq!(format_currency(dec("5000")), "₹5,000.00");
        assert_eq!(format_currency(dec("240081")), "₹2,40,081.00");
        assert_eq!(format_currency(dec("12345678.9")), "₹1,23,45,678.90");
        assert_eq!(format_currency(dec("0.125")), "₹0.13");
        assert_eq!(format_currency(dec("-420")), "-₹420.00");
    }

    #[test]
    fn test_format_monthly_plan() {
        assert_eq!(format_monthly_plan(dec("5000.00")), "₹5,000.00/month");
    }

    #[test]
    fn test_format_time_left() {
        assert_eq!(format_time_left(TimeLeft::Days(300)), "300 days left");
        assert_eq!(format_time_left(TimeLeft::Days(1)), "1 day left");
        assert_eq!(format_time_left(TimeLeft::Reached), "Target date reached");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0% Complete");
        assert_eq!(format_percent(0.426), "43% Complete");
        assert_eq!(format_percent(1.7), "100% Complete");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("amount", "100").unwrap(), dec("100"));
        assert_eq!(parse_amount("amount", " ₹1,250.50 ").unwrap(), dec("1250.50"));
        assert_eq!(
            parse_amount("amount", "   "),
            Err(ValidationError::MissingField("amount"))
        );
        assert_eq!(
            parse_amount("amount", "0"),
            Err(ValidationError::NotPositive("amount"))
        );
        assert_eq!(
            parse_amount("amount", "-10"),
            Err(ValidationError::NotPositive("amount"))
        );
        assert!(matches!(
            parse_amount("amount", "ten"),
            Err(ValidationError::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_parse_months() {
        assert_eq!(parse_months("12").unwrap(), 12);
        assert!(matches!(parse_months(""), Err(ValidationError::MissingField(_))));
        assert!(matches!(parse_months("0"), Err(ValidationError::NotPositive(_))));
        assert!(matches!(parse_months("-2"), Err(ValidationError::NotPositive(_))));
        assert!(matches!(parse_months("1.5"), Err(ValidationError::NotNumeric { .. })));
        assert!(matches!(
            parse_months("99999999999"),
            Err(ValidationError::TooLarge(_))
        ));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-12-31").unwrap(),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );
        assert!(matches!(parse_date(""), Err(ValidationError::MissingField(_))));
        assert!(matches!(
            parse_date("31/12/2026"),
            Err(ValidationError::InvalidDate(_))
        ));
    }
}
