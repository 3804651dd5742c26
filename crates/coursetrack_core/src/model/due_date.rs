//! Canonical due-date value type.
//!
//! # Responsibility
//! - Parse and render the canonical `DD-MM-YYYY` text form.
//! - Accept the legacy `DD/MM/YY` form on normalization paths only.
//!
//! # Invariants
//! - A constructed `DueDate` always holds a real calendar date.
//! - Ordering is calendar order, never text order.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const CANONICAL_FORMAT: &str = "%d-%m-%Y";
const LEGACY_FORMAT: &str = "%d/%m/%y";

// chrono's `%Y` accepts year fields of varying width, so the shape is
// checked up front to keep the canonical form strict.
static CANONICAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("valid canonical date regex"));
static LEGACY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{2}$").expect("valid legacy date regex"));

/// Error raised when due-date text cannot become a [`DueDate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueDateError {
    /// Text does not match the expected `DD-MM-YYYY` shape.
    Format(String),
    /// Text has the right shape but names an impossible date.
    Calendar(String),
}

impl Display for DueDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(value) => {
                write!(f, "due date `{value}` is not in DD-MM-YYYY format")
            }
            Self::Calendar(value) => {
                write!(f, "due date `{value}` is not a valid calendar date")
            }
        }
    }
}

impl Error for DueDateError {}

/// Calendar date in the canonical `DD-MM-YYYY` form.
///
/// `Ord` compares calendar values, so a plain sort on `DueDate` keys yields
/// calendar order (text order would put `01-12-2023` after `05-01-2024`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses canonical text, or legacy `DD/MM/YY` text as a fallback.
    ///
    /// Used by persistence when normalizing documents written by older
    /// versions. Legacy two-digit years follow the chrono pivot
    /// (00-68 -> 20xx, 69-99 -> 19xx).
    pub fn parse_normalized(value: &str) -> Result<Self, DueDateError> {
        let trimmed = value.trim();
        if LEGACY_RE.is_match(trimmed) {
            return NaiveDate::parse_from_str(trimmed, LEGACY_FORMAT)
                .map(Self)
                .map_err(|_| DueDateError::Calendar(trimmed.to_string()));
        }
        trimmed.parse()
    }

    /// Returns the underlying calendar value.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for DueDate {
    type Err = DueDateError;

    /// Parses strictly canonical `DD-MM-YYYY` text.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if !CANONICAL_RE.is_match(trimmed) {
            return Err(DueDateError::Format(trimmed.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, CANONICAL_FORMAT)
            .map(Self)
            .map_err(|_| DueDateError::Calendar(trimmed.to_string()))
    }
}

impl Display for DueDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl From<NaiveDate> for DueDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{DueDate, DueDateError};

    #[test]
    fn canonical_text_parses_and_round_trips() {
        let due: DueDate = "05-01-2024".parse().expect("canonical date should parse");
        assert_eq!(due.to_string(), "05-01-2024");
    }

    #[test]
    fn iso_order_is_rejected_as_format_error() {
        let err = "2024-01-01".parse::<DueDate>().unwrap_err();
        assert_eq!(err, DueDateError::Format("2024-01-01".to_string()));
    }

    #[test]
    fn impossible_month_is_rejected_as_calendar_error() {
        let err = "31-13-2024".parse::<DueDate>().unwrap_err();
        assert_eq!(err, DueDateError::Calendar("31-13-2024".to_string()));
    }

    #[test]
    fn strict_parse_refuses_legacy_slashes() {
        let err = "05/01/24".parse::<DueDate>().unwrap_err();
        assert!(matches!(err, DueDateError::Format(_)));
    }

    #[test]
    fn normalized_parse_maps_legacy_years_onto_canonical_form() {
        let due = DueDate::parse_normalized("05/01/24").expect("legacy date should parse");
        assert_eq!(due.to_string(), "05-01-2024");

        let past = DueDate::parse_normalized("31/12/99").expect("legacy date should parse");
        assert_eq!(past.to_string(), "31-12-1999");
    }

    #[test]
    fn normalized_parse_keeps_canonical_input_unchanged() {
        let due = DueDate::parse_normalized("20-01-2024").expect("canonical date should parse");
        assert_eq!(due.to_string(), "20-01-2024");
    }

    #[test]
    fn ordering_is_calendar_order_not_text_order() {
        let december: DueDate = "01-12-2023".parse().unwrap();
        let january: DueDate = "05-01-2024".parse().unwrap();
        assert!(december < january);
        assert!(december.to_string() > january.to_string());
    }
}
