//! Display configuration: formatting policy and status label overrides.

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::collections::HashMap;

use super::error::ValidationError;
use crate::domain::presentation::{DisplayFormat, SymbolPosition};
use crate::domain::project::{ProjectStatus, StatusResolver};

/// Display configuration
///
/// Status label keys are status codes. Environment variable names cannot
/// carry `-`, so `in_progress` is accepted for `in-progress`.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default)]
    pub symbol_position: SymbolPosition,

    #[serde(default = "default_group_separator")]
    pub group_separator: String,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,

    #[serde(default)]
    pub fraction_digits: u32,

    #[serde(default = "default_date_pattern")]
    pub date_pattern: String,

    #[serde(default = "default_missing_text")]
    pub missing_text: String,

    #[serde(default = "default_missing_date")]
    pub missing_date: String,

    /// Label overrides keyed by status code
    #[serde(default)]
    pub status_labels: HashMap<String, String>,
}

impl DisplayConfig {
    /// Formatting policy built from this section.
    pub fn format(&self) -> DisplayFormat {
        DisplayFormat {
            currency_symbol: self.currency_symbol.clone(),
            symbol_position: self.symbol_position,
            group_separator: self.group_separator.clone(),
            decimal_separator: self.decimal_separator.clone(),
            fraction_digits: self.fraction_digits,
            date_pattern: self.date_pattern.clone(),
            missing_text: self.missing_text.clone(),
            missing_date: self.missing_date.clone(),
        }
    }

    /// Status resolver with the configured overrides applied.
    pub fn status_resolver(&self) -> StatusResolver {
        StatusResolver::with_labels(
            self.status_labels
                .iter()
                .map(|(code, label)| (normalize_code(code), label.clone())),
        )
    }

    /// Validate display configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ValidationError::EmptyCurrencySymbol);
        }
        if self.fraction_digits > 8 {
            return Err(ValidationError::TooManyFractionDigits);
        }
        if StrftimeItems::new(&self.date_pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ValidationError::InvalidDatePattern(self.date_pattern.clone()));
        }
        for code in self.status_labels.keys() {
            if !ProjectStatus::from(normalize_code(code)).is_known() {
                return Err(ValidationError::UnknownStatusCode(code.clone()));
            }
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            symbol_position: SymbolPosition::default(),
            group_separator: default_group_separator(),
            decimal_separator: default_decimal_separator(),
            fraction_digits: 0,
            date_pattern: default_date_pattern(),
            missing_text: default_missing_text(),
            missing_date: default_missing_date(),
            status_labels: HashMap::new(),
        }
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase().replace('_', "-")
}

fn default_currency_symbol() -> String {
    "₫".to_string()
}

fn default_group_separator() -> String {
    ".".to_string()
}

fn default_decimal_separator() -> String {
    ",".to_string()
}

fn default_date_pattern() -> String {
    "%d/%m/%Y".to_string()
}

fn default_missing_text() -> String {
    "Not set".to_string()
}

fn default_missing_date() -> String {
    "N/A".to_string()
}
