//! Display formatting policy.
//!
//! Every value shown on the detail page goes through one `DisplayFormat`,
//! so placeholder behaviour for absent values is decided in one place.

use chrono::NaiveDate;
use std::fmt::Write;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Prefix,
    #[default]
    Suffix,
}

/// Formatting policy for currency, dates and free text.
///
/// Defaults follow Vietnamese dong conventions: `1.000.000 ₫`, `31/01/2024`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFormat {
    pub currency_symbol: String,
    pub symbol_position: SymbolPosition,
    pub group_separator: String,
    pub decimal_separator: String,
    pub fraction_digits: u32,
    /// `chrono` strftime pattern.
    pub date_pattern: String,
    /// Shown for absent or blank text and absent amounts.
    pub missing_text: String,
    /// Shown for absent dates.
    pub missing_date: String,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "₫".to_string(),
            symbol_position: SymbolPosition::Suffix,
            group_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            fraction_digits: 0,
            date_pattern: "%d/%m/%Y".to_string(),
            missing_text: "Not set".to_string(),
            missing_date: "N/A".to_string(),
        }
    }
}

impl DisplayFormat {
    /// Formats an amount. This is the only place amounts are rounded.
    pub fn currency(&self, value: Money) -> String {
        let mut rounded = value
            .amount()
            .round_dp_with_strategy(self.fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        rounded = rounded.abs();
        rounded.rescale(self.fraction_digits);

        let digits = rounded.to_string();
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut number = group_thousands(whole, &self.group_separator);
        if let Some(fraction) = fraction {
            number.push_str(&self.decimal_separator);
            number.push_str(fraction);
        }

        let sign = if negative { "-" } else { "" };
        match self.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{}{number}", self.currency_symbol),
            SymbolPosition::Suffix => format!("{sign}{number} {}", self.currency_symbol),
        }
    }

    /// Formats an amount that may never have been recorded.
    pub fn optional_currency(&self, value: Option<Money>) -> String {
        match value {
            Some(value) => self.currency(value),
            None => self.missing_text.clone(),
        }
    }

    pub fn date(&self, value: Option<NaiveDate>) -> String {
        match value {
            Some(date) => {
                // An unusable pattern falls back to ISO rather than panicking.
                let mut out = String::new();
                match write!(out, "{}", date.format(&self.date_pattern)) {
                    Ok(()) => out,
                    Err(_) => date.to_string(),
                }
            }
            None => self.missing_date.clone(),
        }
    }

    /// Free text, with blank values replaced by the placeholder.
    pub fn text(&self, value: Option<&str>) -> String {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => self.missing_text.clone(),
        }
    }
}

fn group_thousands(whole: &str, separator: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> DisplayFormat {
        DisplayFormat {
            currency_symbol: "$".to_string(),
            symbol_position: SymbolPosition::Prefix,
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            fraction_digits: 2,
            date_pattern: "%Y-%m-%d".to_string(),
            ..DisplayFormat::default()
        }
    }

    #[test]
    fn formats_dong_with_grouping() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.currency(Money::from_units(1_000_000)), "1.000.000 ₫");
        assert_eq!(fmt.currency(Money::from_units(999)), "999 ₫");
        assert_eq!(fmt.currency(Money::ZERO), "0 ₫");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.currency(Money::from_units(-100)), "-100 ₫");
        assert_eq!(usd().currency(Money::from_units(-1234)), "-$1,234.00");
    }

    #[test]
    fn rounds_only_when_formatting() {
        let fmt = DisplayFormat::default();
        let value: Money = "1499.5".parse().unwrap();
        assert_eq!(fmt.currency(value), "1.500 ₫");
        assert_eq!(usd().currency("0.005".parse().unwrap()), "$0.01");
        assert_eq!(usd().currency("1234567.8".parse().unwrap()), "$1,234,567.80");
    }

    #[test]
    fn tiny_negative_rounding_to_zero_has_no_sign() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.currency("-0.2".parse().unwrap()), "0 ₫");
    }

    #[test]
    fn absent_values_use_placeholders() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.date(None), "N/A");
        assert_eq!(fmt.text(None), "Not set");
        assert_eq!(fmt.text(Some("   ")), "Not set");
        assert_eq!(fmt.optional_currency(None), "Not set");
    }

    #[test]
    fn formats_dates_with_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31);
        assert_eq!(DisplayFormat::default().date(date), "31/01/2024");
        assert_eq!(usd().date(date), "2024-01-31");
    }

    #[test]
    fn broken_date_pattern_falls_back_to_iso() {
        let format = DisplayFormat {
            date_pattern: "%Q".to_string(),
            ..DisplayFormat::default()
        };
        assert_eq!(format.date(NaiveDate::from_ymd_opt(2024, 1, 31)), "2024-01-31");
    }

    #[test]
    fn group_thousands_handles_short_numbers() {
        assert_eq!(group_thousands("1", "."), "1");
        assert_eq!(group_thousands("1000", "."), "1.000");
        assert_eq!(group_thousands("123456", " "), "123 456");
    }
}
