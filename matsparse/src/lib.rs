//! matsparse - Sparse Matrix Sub-element Writer and Reader
//!
//! This library writes the compressed-column arrays of a [`SparseMatrix`]
//! (`ir`, `jc`, `pr`, `pi`) into a buffered output and rebuilds matrices
//! from already-decoded raw buffers handed over by a container decoder.
//!
//! ## Architecture
//!
//! - **matsparse-core**: sparse data model, codec, format metadata (no I/O)
//! - **matsparse**: buffered outputs, writer, reader, configuration, logging
//!
//! ## Quick Start
//!
//! ```rust
//! use matsparse::{
//!     BufferedOutput, SparseMatrix, SparseReader, SparseWriter, VecOutput, WriterConfig,
//! };
//!
//! fn example() -> matsparse::Result<()> {
//!     let mut matrix = SparseMatrix::new("A", 3, 3, false, 2)?;
//!     matrix.set_real(5.0, 2, 0)?;
//!     matrix.set_real(7.0, 0, 2)?;
//!
//!     let mut out = VecOutput::new();
//!     let summary = SparseWriter::new(WriterConfig::default()).write(&matrix, &mut out)?;
//!
//!     let reader = SparseReader::new(summary.byte_order);
//!     let back = reader.read_summary(&matrix.descriptor(), out.as_slice(), &summary)?;
//!     assert_eq!(back.get_real(2, 0), 5.0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export core abstractions and format definitions
pub use matsparse_core::{
    // Data model
    CapacityPolicy, CscArrays, Entry, IndexKey, SparseMatrix, SparseOptions,
    SubElement, SubElementKind,
    // Traits
    BufferedOutput, MatrixElement, NumericArray,
    // Format definitions
    ArrayClass, ArrayDescriptor, ArrayFlags, ByteOrder,
    // Error handling
    ErrorCategory, MatError, Result,
};
pub use matsparse_core::codec;

pub mod config;
pub mod output;
pub mod reader;
pub mod writer;

pub use config::WriterConfig;
pub use output::VecOutput;
pub use reader::SparseReader;
pub use writer::{SparseWriter, WriteSummary, WrittenSubElement};
