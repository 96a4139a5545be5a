//! Sequence container types over manually managed memory
//!
//! ## Containers
//!
//! - **`DynVec<T>`** - growable vector with a geometric (1.5x) capacity
//!   ladder and realloc-based growth
//! - **`FixedVec<T, N>`** - capacity-bounded vector, one allocation made
//!   at construction
//! - **`FifoQueue<T>`** - strict FIFO queue layered on `DynVec`
//!
//! The two vectors implement the shared [`Sequence`] contract; the queue is
//! an adapter over the dynamic one.

mod dyn_vec;
mod fixed_vec;
mod queue;
mod sequence;

pub use dyn_vec::DynVec;
pub use fixed_vec::FixedVec;
pub use queue::FifoQueue;
pub use sequence::Sequence;
