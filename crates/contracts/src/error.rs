//! Validation failures raised at the create/edit boundary.
//!
//! These are the only user-facing errors in the application: they are
//! shown inline or as a transient toast and never retried.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty.
    MissingField(&'static str),
    /// A numeric field fell outside its allowed range.
    OutOfRange {
        field: &'static str,
        message: String,
    },
    /// A date field could not be parsed as YYYY-MM-DD.
    InvalidDate(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "Kolom '{field}' wajib diisi")
            }
            ValidationError::OutOfRange { field, message } => {
                write!(f, "Kolom '{field}' tidak valid: {message}")
            }
            ValidationError::InvalidDate(field) => {
                write!(f, "Tanggal '{field}' harus berformat YYYY-MM-DD")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject empty or whitespace-only required text fields.
pub fn require(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Parse a YYYY-MM-DD date field.
pub fn require_date(
    field: &'static str,
    value: &str,
) -> Result<chrono::NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_trims_and_rejects_empty() {
        assert_eq!(require("name", "  Kabel  ").unwrap(), "Kabel");
        assert_eq!(
            require("name", "   "),
            Err(ValidationError::MissingField("name"))
        );
    }

    #[test]
    fn require_date_parses_iso() {
        assert!(require_date("dueDate", "2023-12-15").is_ok());
        assert_eq!(
            require_date("dueDate", "15/12/2023"),
            Err(ValidationError::InvalidDate("dueDate"))
        );
        assert_eq!(
            require_date("dueDate", ""),
            Err(ValidationError::MissingField("dueDate"))
        );
    }

    #[test]
    fn messages_name_the_field() {
        let err = ValidationError::MissingField("lokasi");
        assert!(err.to_string().contains("lokasi"));
    }
}
