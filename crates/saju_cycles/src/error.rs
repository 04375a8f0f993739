//! Error types for derived cycle calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::SajuError;

/// Errors from luck, fortune and compatibility calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CycleError {
    /// Invalid date or symbol input.
    Chart(SajuError),
    /// Requested number of decade pillars outside 1..=12.
    InvalidCycleCount(u8),
    /// Year range is empty or too long.
    InvalidYearRange { start: i32, end: i32 },
}

impl Display for CycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(e) => write!(f, "chart error: {e}"),
            Self::InvalidCycleCount(n) => {
                write!(f, "invalid luck cycle count {n}: expected 1..=12")
            }
            Self::InvalidYearRange { start, end } => {
                write!(f, "invalid year range {start}..={end}")
            }
        }
    }
}

impl Error for CycleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SajuError> for CycleError {
    fn from(e: SajuError) -> Self {
        Self::Chart(e)
    }
}
