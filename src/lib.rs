//! # seqbuf: Minimal Generic Container Toolkit
//!
//! This crate provides three sequence containers over raw, manually managed
//! memory, with the memory-layout discipline as the point: how capacity
//! grows, how logical size stays distinct from allocated capacity, and how
//! ordered and unordered removal compose when a queue sits on top of a
//! vector.
//!
//! ## Key Features
//!
//! - **`DynVec<T>`**: growable vector whose capacity walks the geometric
//!   ladder `floor(1.5^k)`, reallocating in place where the allocator allows
//! - **`FixedVec<T, N>`**: capacity-bounded vector with a single zeroed
//!   allocation made at construction
//! - **`FifoQueue<T>`**: strict FIFO queue composed on `DynVec` with no
//!   storage of its own
//! - **`Sequence<T>`**: the capability contract the two vectors share
//! - **Typed errors everywhere**: a failed operation returns
//!   [`SeqBufError`] and has mutated nothing
//!
//! ## Quick Start
//!
//! ```rust
//! use seqbuf::{DynVec, FifoQueue, FixedVec};
//!
//! // Geometric-growth vector
//! let mut vec = DynVec::new()?;
//! vec.push(10)?;
//! vec.push(20)?;
//! vec.push(30)?;
//! assert_eq!(vec.as_slice(), &[10, 20, 30]);
//!
//! // Ordered removal shifts survivors down; swap removal is O(1)
//! assert_eq!(vec.remove(0)?, 10);
//! assert_eq!(vec.as_slice(), &[20, 30]);
//!
//! // Bounded vector: the capacity is part of the type
//! let mut bounded: FixedVec<u8, 4> = FixedVec::new()?;
//! bounded.resize(4, 0xff)?;
//! assert!(bounded.is_full());
//!
//! // FIFO queue over the growable vector
//! let mut queue = FifoQueue::new()?;
//! queue.push("first")?;
//! queue.push("second")?;
//! assert_eq!(queue.pop()?, "first");
//! # Ok::<(), seqbuf::SeqBufError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod containers;
pub mod error;

mod memory;

pub use containers::{DynVec, FifoQueue, FixedVec, Sequence};
pub use error::{Result, SeqBufError};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing seqbuf v{}", VERSION);
}
