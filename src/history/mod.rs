//! The per-row history dialog.
//!
//! Each trigger carries its data as raw attribute strings (`title`,
//! `headers`, `history`). Nothing about them is trusted: parsing happens when
//! the dialog is opened, and any failure is reported instead of propagated.

mod modal;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use modal::{ClickTarget, GENERIC_FAILURE_NOTICE, HistoryModal};

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("headers attribute is not a pair of labels: {0}")]
    Headers(#[source] serde_json::Error),

    #[error("history attribute is not a list of year/value records: {0}")]
    History(#[source] serde_json::Error),
}

/// The raw data attributes carried by a control that opens the dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTrigger {
    pub title: String,
    pub headers: String,
    pub history: String,
}

impl HistoryTrigger {
    pub fn new(title: impl Into<String>, headers: impl Into<String>, history: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            headers: headers.into(),
            history: history.into(),
        }
    }
}

/// A table cell value: either a number or preformatted text such as
/// `"21.4 °C"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub year: i32,
    pub value: CellValue,
}

/// A parsed, ready-to-render history table, rows newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryTable {
    pub title: String,
    pub headers: [String; 2],
    pub rows: Vec<HistoryRecord>,
}

impl HistoryTable {
    pub fn from_trigger(trigger: &HistoryTrigger) -> Result<Self, HistoryError> {
        let headers: [String; 2] = serde_json::from_str(&trigger.headers).map_err(HistoryError::Headers)?;
        let mut rows: Vec<HistoryRecord> =
            serde_json::from_str(&trigger.history).map_err(HistoryError::History)?;
        rows.reverse();

        Ok(Self {
            title: format!("History: {}", trigger.title),
            headers,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_newest_first() {
        let trigger = HistoryTrigger::new(
            "Rain",
            r#"["Year","Details"]"#,
            r#"[{"year":2019,"value":"0.0 mm"},{"year":2020,"value":"3.2 mm"},{"year":2021,"value":"12.0 mm"}]"#,
        );
        let table = HistoryTable::from_trigger(&trigger).unwrap();
        let years: Vec<i32> = table.rows.iter().map(|row| row.year).collect();
        assert_eq!(years, [2021, 2020, 2019]);
        assert_eq!(table.title, "History: Rain");
        assert_eq!(table.rows[0].value.to_string(), "12.0 mm");
    }

    #[test]
    fn numeric_values_print_as_written() {
        let trigger = HistoryTrigger::new("t", r#"["a","b"]"#, r#"[{"year":2000,"value":10},{"year":2001,"value":2.5}]"#);
        let table = HistoryTable::from_trigger(&trigger).unwrap();
        assert_eq!(table.rows[0].value.to_string(), "2.5");
        assert_eq!(table.rows[1].value.to_string(), "10");
    }

    #[test]
    fn headers_must_be_a_pair() {
        let trigger = HistoryTrigger::new("t", r#"["only one"]"#, "[]");
        assert!(matches!(HistoryTable::from_trigger(&trigger), Err(HistoryError::Headers(_))));
    }

    #[test]
    fn empty_history_is_valid() {
        let trigger = HistoryTrigger::new("t", r#"["a","b"]"#, "[]");
        assert!(HistoryTable::from_trigger(&trigger).unwrap().rows.is_empty());
    }
}
