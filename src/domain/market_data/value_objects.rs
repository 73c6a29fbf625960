use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::time_utils::format_epoch_millis;

/// Value Object - ticker identifier. Opaque: kept exactly as the server sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        if symbol.is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(symbol))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// Value Object - window of history requested from `/api/prices`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum TimeRange {
    #[strum(serialize = "1D")]
    #[serde(rename = "1D")]
    OneDay,

    #[strum(serialize = "7D")]
    #[serde(rename = "7D")]
    SevenDays,

    #[strum(serialize = "1M")]
    #[serde(rename = "1M")]
    OneMonth,

    #[strum(serialize = "6M")]
    #[serde(rename = "6M")]
    SixMonths,

    #[strum(serialize = "1Y")]
    #[serde(rename = "1Y")]
    OneYear,

    #[default]
    #[strum(serialize = "All")]
    #[serde(rename = "All")]
    All,
}

impl TimeRange {
    /// Query-string value, e.g. `1M`.
    pub fn as_query_value(&self) -> &str {
        self.as_ref()
    }
}

/// Value Object - one entry of a series' `times` array.
///
/// The backend serializes timestamps either as strings (ISO dates, RFC 1123
/// from Flask's `jsonify`) or as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeLabel {
    EpochMillis(f64),
    Text(String),
}

impl TimeLabel {
    pub fn display_label(&self) -> String {
        match self {
            TimeLabel::EpochMillis(ms) => format_epoch_millis(*ms),
            TimeLabel::Text(text) => text.clone(),
        }
    }
}

impl From<&str> for TimeLabel {
    fn from(value: &str) -> Self {
        TimeLabel::Text(value.to_string())
    }
}

impl From<f64> for TimeLabel {
    fn from(value: f64) -> Self {
        TimeLabel::EpochMillis(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn symbol_keeps_case() {
        assert_eq!(Symbol::new("brk.b".to_string()).unwrap().value(), "brk.b");
    }

    #[test]
    fn empty_symbol_rejected() {
        assert!(Symbol::new(String::new()).is_err());
        assert!(serde_json::from_str::<Vec<Symbol>>(r#"["AAPL", ""]"#).is_err());
    }

    #[test]
    fn ranges_in_button_order() {
        let labels: Vec<String> = TimeRange::iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, ["1D", "7D", "1M", "6M", "1Y", "All"]);
        assert_eq!(TimeRange::default(), TimeRange::All);
        assert_eq!("6M".parse::<TimeRange>().unwrap(), TimeRange::SixMonths);
    }

    #[test]
    fn time_label_accepts_strings_and_numbers() {
        let labels: Vec<TimeLabel> =
            serde_json::from_str(r#"["2024-01-01", 1704067200000]"#).unwrap();
        assert_eq!(labels[0], TimeLabel::from("2024-01-01"));
        assert_eq!(labels[1], TimeLabel::EpochMillis(1_704_067_200_000.0));
    }
}
