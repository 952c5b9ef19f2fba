//! Abstract interfaces shared by sparse storage and its collaborators
//!
//! Traits are pure interfaces; the sparse matrix implements them and the
//! std crate supplies concrete sinks.

pub mod array;
pub mod element;
pub mod backend;

pub use array::NumericArray;
pub use element::MatrixElement;
pub use backend::BufferedOutput;
