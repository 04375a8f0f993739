//! Unified error type for the convenience layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::SajuError;
use saju_cycles::CycleError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SajuRsError {
    /// Text is not a `YYYY-MM-DD` date.
    DateParse(String),
    /// Text is not an `HH:MM` time.
    TimeParse(String),
    /// Out-of-range date, time or symbol.
    Chart(SajuError),
    /// Invalid derived-calculation request.
    Cycle(CycleError),
}

impl Display for SajuRsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParse(s) => write!(f, "invalid date '{s}': expected YYYY-MM-DD"),
            Self::TimeParse(s) => write!(f, "invalid time '{s}': expected HH:MM"),
            Self::Chart(e) => write!(f, "{e}"),
            Self::Cycle(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SajuRsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(e) => Some(e),
            Self::Cycle(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SajuError> for SajuRsError {
    fn from(e: SajuError) -> Self {
        Self::Chart(e)
    }
}

impl From<CycleError> for SajuRsError {
    fn from(e: CycleError) -> Self {
        match e {
            CycleError::Chart(inner) => Self::Chart(inner),
            other => Self::Cycle(other),
        }
    }
}
