//! Failure modes of tower generation.

use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationError {
    /// The requested shape is below the minimum of 2 levels and 4 rooms per level.
    InvalidParameters { levels: u32, rooms_per_level: u32 },
    /// The construction loop stayed stuck after the refactor attempt ceiling.
    RefactorExhausted { attempts: u32 },
    /// Refactor could not find any candidate pair spanning two components.
    NoAlternativeNeighbors,
    /// The finished tower splits into more than one component.
    AuditFailed { components: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { levels, rooms_per_level } => write!(
                f,
                "invalid tower shape: {levels} level(s) x {rooms_per_level} room(s); \
                 need at least 2 levels and 4 rooms per level"
            ),
            Self::RefactorExhausted { attempts } => {
                write!(f, "attempted to refactor {attempts} time(s); all failed")
            }
            Self::NoAlternativeNeighbors => {
                write!(f, "unable to find candidate neighbors with different labels")
            }
            Self::AuditFailed { components } => {
                write!(f, "the tower is split into {components} disconnected components")
            }
        }
    }
}

impl Error for GenerationError {}
