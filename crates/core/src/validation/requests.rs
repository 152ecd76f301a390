use serde::Deserialize;

use crate::errors::{FieldError, ValidationError};
use crate::rates::Presentation;
use crate::symbols::Symbol;

/// Query of `GET /rates`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatesRequest {
    pub base: Option<String>,
}

impl RatesRequest {
    /// Absent or empty `base` means fiat-as-base.
    pub fn validate(&self) -> Result<Presentation, ValidationError> {
        match self.base.as_deref().unwrap_or("") {
            "" | "fiat" => Ok(Presentation::FiatAsBase),
            "crypto" => Ok(Presentation::CryptoAsBase),
            other => Err(ValidationError::InvalidFields(vec![FieldError::new(
                "base", other,
            )])),
        }
    }
}

/// Query of `GET /historical-rates`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRatesRequest {
    pub base_currency: Option<String>,
    pub target_currency: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// A validated historical lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoricalQuery {
    pub base: Symbol,
    pub target: Symbol,
    pub start: i64,
    /// `None` when the caller gave no usable end; read up to now.
    pub end: Option<i64>,
}

impl HistoricalRatesRequest {
    /// Checks `basecurrency`, `targetcurrency` and `start` in that order and
    /// reports every failure at once.
    pub fn validate(&self) -> Result<HistoricalQuery, ValidationError> {
        let mut errors = Vec::new();

        let base = parse_symbol("baseCurrency", self.base_currency.as_deref(), &mut errors);
        let target = parse_symbol("targetCurrency", self.target_currency.as_deref(), &mut errors);

        let raw_start = self.start.as_deref().unwrap_or("").trim();
        let start = raw_start.parse::<i64>().ok();
        if start.is_none() {
            errors.push(FieldError::new("start", raw_start));
        }

        let end = self
            .end
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<i64>().ok());

        match (base, target, start) {
            (Some(base), Some(target), Some(start)) if errors.is_empty() => Ok(HistoricalQuery {
                base,
                target,
                start,
                end,
            }),
            _ => Err(ValidationError::InvalidFields(errors)),
        }
    }
}

fn parse_symbol(field: &str, raw: Option<&str>, errors: &mut Vec<FieldError>) -> Option<Symbol> {
    let raw = raw.unwrap_or("");
    match raw.parse::<Symbol>() {
        Ok(symbol) => Some(symbol),
        Err(_) => {
            errors.push(FieldError::new(field, raw));
            None
        }
    }
}
