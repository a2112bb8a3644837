//! Sequential document codes
//!
//! Codes have the shape `<prefix><sequence><yy>`: a two-letter prefix, a
//! sequence zero-padded to four digits, and the two-digit year. `RE000124`
//! is the first inbound requisition of 2024. Sequences restart at 1 every
//! year and are independent per prefix.

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width the sequence segment is zero-padded to
pub const SEQUENCE_WIDTH: usize = 4;

/// Kind of document a code is issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Inbound requisition (`RE`)
    #[serde(rename = "RE")]
    Inbound,
    /// Outbound requisition (`RS`)
    #[serde(rename = "RS")]
    Outbound,
    /// Purchase order (`PC`)
    #[serde(rename = "PC")]
    Purchase,
}

impl DocumentType {
    pub fn prefix(&self) -> &'static str {
        match self {
            DocumentType::Inbound => "RE",
            DocumentType::Outbound => "RS",
            DocumentType::Purchase => "PC",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("Sequence overflow for {0} in year {1}")]
    SequenceOverflow(DocumentType, String),
}

/// Two-digit year suffix, e.g. `2024 -> "24"`
pub fn year_suffix(year: i32) -> String {
    format!("{:02}", year.rem_euclid(100))
}

/// Calendar year a code issued at `now` belongs to, as seen from the
/// warehouse's UTC offset.
pub fn document_year(now: DateTime<Utc>, offset: FixedOffset) -> i32 {
    now.with_timezone(&offset).year()
}

/// Format a code from its parts
pub fn format_code(doc_type: DocumentType, sequence: u32, year: i32) -> String {
    format!(
        "{}{:0width$}{}",
        doc_type.prefix(),
        sequence,
        year_suffix(year),
        width = SEQUENCE_WIDTH
    )
}

/// Extract the sequence number from a code of the given type and year.
///
/// Returns `None` when the code belongs to another type or year, or when the
/// middle segment is not a plain run of digits.
pub fn parse_sequence(code: &str, doc_type: DocumentType, year: i32) -> Option<u32> {
    let suffix = year_suffix(year);
    let middle = code
        .strip_prefix(doc_type.prefix())?
        .strip_suffix(suffix.as_str())?;

    if middle.is_empty() || !middle.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    middle.parse().ok()
}

/// Sequence number to continue from, given the most recent code issued for
/// this type and year. A missing or malformed code restarts the count.
pub fn last_sequence(last_code: Option<&str>, doc_type: DocumentType, year: i32) -> u32 {
    last_code
        .and_then(|code| parse_sequence(code, doc_type, year))
        .unwrap_or(0)
}

/// Compute the next code from the last issued one.
///
/// The backend's counter table is seeded with [`last_sequence`] and bumped
/// by one per issue, so it hands out exactly the codes this returns.
pub fn next_from_last(
    doc_type: DocumentType,
    year: i32,
    last_code: Option<&str>,
) -> Result<String, CodeError> {
    let next = last_sequence(last_code, doc_type, year)
        .checked_add(1)
        .ok_or_else(|| CodeError::SequenceOverflow(doc_type, year_suffix(year)))?;

    Ok(format_code(doc_type, next, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_code_of_year() {
        assert_eq!(
            next_from_last(DocumentType::Inbound, 2024, None).unwrap(),
            "RE000124"
        );
        assert_eq!(
            next_from_last(DocumentType::Purchase, 2026, None).unwrap(),
            "PC000126"
        );
    }

    #[test]
    fn test_increments_last_code() {
        assert_eq!(
            next_from_last(DocumentType::Outbound, 2024, Some("RS004124")).unwrap(),
            "RS004224"
        );
    }

    #[test]
    fn test_malformed_code_restarts_sequence() {
        assert_eq!(
            next_from_last(DocumentType::Inbound, 2024, Some("REabcd24")).unwrap(),
            "RE000124"
        );
        assert_eq!(
            next_from_last(DocumentType::Inbound, 2024, Some("RE24")).unwrap(),
            "RE000124"
        );
    }

    #[test]
    fn test_code_from_other_year_is_ignored() {
        assert_eq!(parse_sequence("RE000923", DocumentType::Inbound, 2024), None);
        assert_eq!(
            next_from_last(DocumentType::Inbound, 2024, Some("RE000923")).unwrap(),
            "RE000124"
        );
    }

    #[test]
    fn test_code_from_other_type_is_ignored() {
        assert_eq!(parse_sequence("RS000524", DocumentType::Inbound, 2024), None);
    }

    #[test]
    fn test_sequence_grows_past_padding() {
        assert_eq!(format_code(DocumentType::Inbound, 10000, 2024), "RE1000024");
        assert_eq!(
            parse_sequence("RE1000024", DocumentType::Inbound, 2024),
            Some(10000)
        );
    }

    #[test]
    fn test_year_suffix() {
        assert_eq!(year_suffix(2024), "24");
        assert_eq!(year_suffix(2000), "00");
        assert_eq!(year_suffix(2105), "05");
    }

    #[test]
    fn test_year_follows_local_calendar() {
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        // 21:30 on New Year's Eve in Brasília, already 2025 in UTC
        let evening = DateTime::parse_from_rfc3339("2025-01-01T00:30:00Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(document_year(evening, brasilia), 2024);
        assert_eq!(document_year(evening, FixedOffset::east_opt(0).unwrap()), 2025);
        assert_eq!(
            format_code(DocumentType::Inbound, 1, document_year(evening, brasilia)),
            "RE000124"
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let last = format_code(DocumentType::Inbound, u32::MAX, 2024);
        assert!(next_from_last(DocumentType::Inbound, 2024, Some(last.as_str())).is_err());
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_next_code_is_successor(seq in 1u32..1_000_000, year in 2000i32..2100) {
                let last = format_code(DocumentType::Outbound, seq, year);
                let next = next_from_last(DocumentType::Outbound, year, Some(last.as_str())).unwrap();
                prop_assert_eq!(parse_sequence(&next, DocumentType::Outbound, year), Some(seq + 1));
            }
        }
    }
}
