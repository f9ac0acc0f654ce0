//! Error type shared by every computation in the crate.
//!
//! Errors fall into two groups:
//!
//! - **Invalid input**: rejected before any work starts (`Invalid*`, `UnknownOrdering`).
//! - **Internal inconsistency**: `Inconsistent`, raised when the algebra disagrees
//!   with itself (for example an empty candidate list for a weight space that is
//!   known to be deficient). These are not recoverable.

use thiserror::Error;

/// Errors produced while building modules or computing monomial bases
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasisError {
    /// Unsupported Cartan type / rank combination
    #[error("invalid Lie type {lie_type}{rank}: {reason}")]
    InvalidLieType {
        lie_type: String,
        rank: usize,
        reason: String,
    },

    /// Highest weight of the wrong length or not dominant
    #[error("invalid highest weight {weight:?}: {reason}")]
    InvalidWeight { weight: Vec<i64>, reason: String },

    /// Operator of a birational sequence is not a positive root
    #[error("invalid operator: {0}")]
    InvalidOperator(String),

    /// Weyl group word is not reduced or has the wrong shape
    #[error("invalid Weyl group word {word:?}: {reason}")]
    InvalidWeylWord { word: Vec<usize>, reason: String },

    /// Degree bound of the coordinate ring is not positive
    #[error("degree must be positive, got {0}")]
    InvalidDegree(usize),

    /// Unrecognized monomial ordering name
    #[error("unknown monomial ordering '{0}'")]
    UnknownOrdering(String),

    /// Internal inconsistency between the representation, the character and the sequence
    #[error("internal inconsistency: {0}")]
    Inconsistent(String),
}

/// Crate result type
pub type Result<T> = std::result::Result<T, BasisError>;

impl BasisError {
    pub(crate) fn weight(weight: &[i64], reason: impl Into<String>) -> Self {
        BasisError::InvalidWeight {
            weight: weight.to_vec(),
            reason: reason.into(),
        }
    }

    pub(crate) fn word(word: &[usize], reason: impl Into<String>) -> Self {
        BasisError::InvalidWeylWord {
            word: word.to_vec(),
            reason: reason.into(),
        }
    }

    /// True for errors that indicate a bug or an unusable birational sequence
    pub fn is_internal(&self) -> bool {
        matches!(self, BasisError::Inconsistent(_))
    }
}
