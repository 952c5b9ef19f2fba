#![no_std]

//! matsparse-core - Sparse Matrix Storage Definitions
//!
//! This crate provides the coordinate-addressed sparse matrix model, its
//! compressed-column (`ir`/`jc`/`pr`/`pi`) export, the per-element binary
//! codec and the format metadata a container decoder hands over. It does no
//! I/O; see the `matsparse` crate for writers and readers over buffered
//! outputs.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod codec;
pub mod error;
pub mod format;
#[cfg(feature = "alloc")]
pub mod sparse;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
#[cfg(feature = "alloc")]
pub use sparse::*;
pub use traits::*;
