//! Error types for scoring operations.

use std::fmt;
use types::{Category, Industry};

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, ScoringError>;

/// Errors raised while loading scoring tables.
///
/// These are configuration defects: the run must abort rather than score
/// with a silently wrong default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// A category has sensitivity coverage but is missing one industry cell.
    MissingSensitivity {
        category: Category,
        industry: Industry,
    },
    /// A category lists the same industry twice in its sensitivity row.
    DuplicateSensitivity {
        category: Category,
        industry: Industry,
    },
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringError::MissingSensitivity { category, industry } => {
                write!(f, "sensitivity table: {} has no cell for {}", category, industry)
            }
            ScoringError::DuplicateSensitivity { category, industry } => {
                write!(f, "sensitivity table: {} lists {} twice", category, industry)
            }
        }
    }
}

impl std::error::Error for ScoringError {}
