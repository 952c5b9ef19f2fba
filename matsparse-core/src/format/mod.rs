//! Format-level metadata for sparse arrays
//!
//! This module holds the metadata the container decoder hands over when a
//! sparse array is created: class code, attribute flags, byte order and the
//! array descriptor. No framing or I/O lives here.

pub mod constants;
pub mod header;
#[cfg(feature = "alloc")]
pub mod descriptor;

pub use header::{ArrayClass, ArrayFlags, ByteOrder};
#[cfg(feature = "alloc")]
pub use descriptor::ArrayDescriptor;
