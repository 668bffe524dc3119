//! Error type for running the tour.

use seqtour_ops::SeqError;
use seqtour_render::DumpError;
use thiserror::Error;

/// Why a demonstration stopped.
#[derive(Debug, Error)]
pub enum TourError {
    /// An operator's precondition did not hold for the sample data.
    #[error(transparent)]
    Operator(#[from] SeqError),

    /// The sink could not render or write a value.
    #[error("dump failed: {0}")]
    Dump(#[from] DumpError),

    /// A category name did not match any category.
    #[error("unknown category '{given}' (expected one of: {expected})")]
    UnknownCategory { given: String, expected: String },
}

/// Result type for tour operations.
pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;
    use seqtour_ops::SeqExt;

    fn pick_single(items: &[i32]) -> Result<i32> {
        Ok(items.iter().copied().single_where(|x| *x > 4)?)
    }

    #[test]
    fn test_operator_errors_propagate_unchanged() {
        assert_eq!(pick_single(&[1, 5]).unwrap(), 5);

        let err = pick_single(&[1, 5, 6]).unwrap_err();
        assert!(matches!(
            err,
            TourError::Operator(SeqError::MoreThanOneMatch { op: "single_where" })
        ));
        assert_eq!(
            err.to_string(),
            SeqError::MoreThanOneMatch { op: "single_where" }.to_string()
        );
    }

    #[test]
    fn test_dump_errors_are_wrapped() {
        let err = TourError::from(DumpError::Serialization("bad value".to_string()));
        assert!(err.to_string().starts_with("dump failed"));
    }
}
