use chrono::NaiveDate;
use thiserror::Error;

/// Rejection of a store mutation. The store is left untouched whenever one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    EmptyField { field: &'static str },

    #[error("unknown season '{input}' (expected Fall, Spring, Spring/Summer or Winter)")]
    InvalidSeason { input: String },

    #[error("year '{input}' is not a number")]
    InvalidYear { input: String },

    #[error("a class needs at least one meeting day")]
    NoMeetingDays,

    #[error("meeting day {row}: {field} is required")]
    EmptyMeetingDayField { row: usize, field: &'static str },

    #[error("no semester at position {index} ({len} semesters)")]
    SemesterIndex { index: usize, len: usize },

    #[error("no assignment at position {index} on {date} ({len} assignments)")]
    AssignmentIndex {
        date: NaiveDate,
        index: usize,
        len: usize,
    },

    #[error("invalid date '{input}' (expected YYYY-MM-DD, today, tomorrow or +Nd/+Nw)")]
    InvalidDate { input: String },
}

/// Rejects blank input, naming the offending field.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_whitespace() {
        assert_eq!(
            require("Title", "   "),
            Err(ValidationError::EmptyField { field: "Title" })
        );
        assert!(require("Title", "Essay").is_ok());
    }

    #[test]
    fn test_messages_name_the_problem() {
        let err = ValidationError::EmptyMeetingDayField { row: 2, field: "Location" };
        assert_eq!(err.to_string(), "meeting day 2: Location is required");

        let err = ValidationError::InvalidSeason { input: "Autumn".to_string() };
        assert!(err.to_string().contains("Autumn"));
    }
}
