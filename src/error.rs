use std::fmt;

/// Typed errors for table construction and workload partitioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// An argument violated its contract (zero capacity, zero workers, ...).
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
    /// The slot array could not be allocated.
    AllocationFailed { slots: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidArgument { argument, reason } => {
                write!(f, "Invalid argument '{}': {}", argument, reason)
            }
            TableError::AllocationFailed { slots } => {
                write!(f, "Failed to allocate {} slots", slots)
            }
        }
    }
}

impl std::error::Error for TableError {}

pub type Result<T> = core::result::Result<T, TableError>;
