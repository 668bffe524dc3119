//! Error types for the operator crate.

use thiserror::Error;

/// Errors raised by operators whose precondition does not hold.
///
/// Each variant carries the name of the operator that failed so the
/// message points at the offending call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// An element was required but the sequence was empty.
    #[error("{op}: sequence contains no elements")]
    NoElements { op: &'static str },

    /// A matching element was required but none satisfied the predicate.
    #[error("{op}: sequence contains no matching element")]
    NoMatch { op: &'static str },

    /// Exactly one element was required but the sequence held several.
    #[error("{op}: sequence contains more than one element")]
    MoreThanOneElement { op: &'static str },

    /// Exactly one match was required but several satisfied the predicate.
    #[error("{op}: sequence contains more than one matching element")]
    MoreThanOneMatch { op: &'static str },

    /// The requested position lies past the end of the sequence.
    #[error("index {index} is out of range for a sequence of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for operator calls.
pub type Result<T> = std::result::Result<T, SeqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_operator() {
        let err = SeqError::MoreThanOneMatch { op: "single_where" };
        assert_eq!(
            err.to_string(),
            "single_where: sequence contains more than one matching element"
        );

        let err = SeqError::IndexOutOfRange { index: 12, len: 6 };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("6 elements"));
    }
}
