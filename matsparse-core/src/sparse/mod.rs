//! Sparse matrix data model
//!
//! [`SparseMatrix`] is the authoritative in-memory form; compressed-column
//! arrays are derived from it on demand.

pub mod entry;
pub mod export;
pub mod key;
pub mod matrix;

pub use entry::Entry;
pub use export::{CscArrays, SubElement, SubElementKind};
pub use key::IndexKey;
pub use matrix::{CapacityPolicy, Iter, SparseMatrix, SparseOptions};
