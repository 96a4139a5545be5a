//! Error handling for the seqbuf library
//!
//! Every fallible container operation reports failure through [`SeqBufError`];
//! an operation that returns `Err` has not mutated the container.

use thiserror::Error;

/// Main error type for the seqbuf library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqBufError {
    /// Index outside the live range of a container
    #[error("out of bounds: index {index}, length {len}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The container's logical length at the time of the access
        len: usize,
    },

    /// Bounded container asked to hold more elements than its fixed capacity
    #[error("capacity exceeded: requested {requested}, capacity {capacity}")]
    CapacityExceeded {
        /// Number of elements requested
        requested: usize,
        /// The fixed capacity
        capacity: usize,
    },

    /// Resize or capacity request that does not strictly grow the container
    #[error("resize must grow: requested {requested}, current {current}")]
    InvalidResize {
        /// The requested new size or capacity
        requested: usize,
        /// The current size or capacity
        current: usize,
    },

    /// Memory allocation failure
    #[error("memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },

    /// Removal attempted on an empty container
    #[error("empty container: {container}")]
    Empty {
        /// Which container the removal targeted
        container: &'static str,
    },
}

impl SeqBufError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::OutOfBounds { index, len }
    }

    /// Create a capacity exceeded error
    pub fn capacity_exceeded(requested: usize, capacity: usize) -> Self {
        Self::CapacityExceeded {
            requested,
            capacity,
        }
    }

    /// Create an invalid resize error
    pub fn invalid_resize(requested: usize, current: usize) -> Self {
        Self::InvalidResize { requested, current }
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create an empty container error
    pub fn empty(container: &'static str) -> Self {
        Self::Empty { container }
    }

    /// Check if this is a recoverable error
    ///
    /// Allocation pressure can clear; precondition violations are caller bugs.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OutOfMemory { .. } => true,
            Self::OutOfBounds { .. } => false,
            Self::CapacityExceeded { .. } => false,
            Self::InvalidResize { .. } => false,
            Self::Empty { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "bounds",
            Self::CapacityExceeded { .. } => "capacity",
            Self::InvalidResize { .. } => "resize",
            Self::OutOfMemory { .. } => "memory",
            Self::Empty { .. } => "empty",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SeqBufError>;

/// Assert that an index is within the live range `[0, len)`
#[inline]
pub fn check_bounds(index: usize, len: usize) -> Result<()> {
    if index >= len {
        Err(SeqBufError::out_of_bounds(index, len))
    } else {
        Ok(())
    }
}
