//! Raw memory management shared by the container types
//!
//! The containers in this crate own exactly one contiguous allocation each.
//! [`RawBuf`] is that allocation: zero-initialized storage for a fixed number
//! of element slots, grown in place via `realloc` where the allocator allows.
//! Element lifetimes are the owning container's responsibility; `RawBuf` only
//! manages the bytes.

mod raw_buf;

pub(crate) use raw_buf::RawBuf;
