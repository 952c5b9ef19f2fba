//! Sparse matrix reader over decoded raw buffers
//!
//! The container decoder strips tags and decompresses; what arrives here are
//! the raw bytes of the `ir`, `jc`, `pr` and `pi` sub-elements plus the array
//! descriptor. Index and value arrays may be longer than the entry count
//! (they are allocated for `nzmax` entries); anything past `jc[cols]` is
//! ignored.

use matsparse_core::codec::{decode_f64_slice, decode_i32_slice};
use matsparse_core::{
    ArrayDescriptor, ByteOrder, MatError, Result, SparseMatrix, SubElementKind,
};

use crate::writer::WriteSummary;

/// Rebuilds [`SparseMatrix`] values from raw sub-element bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct SparseReader {
    byte_order: ByteOrder,
}

impl SparseReader {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self { byte_order }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Decode the four sub-elements into a matrix
    ///
    /// `pi` must be present iff the descriptor is complex. Malformed input
    /// fails with [`MatError::InvalidArgument`].
    pub fn read(
        &self,
        descriptor: &ArrayDescriptor,
        ir: &[u8],
        jc: &[u8],
        pr: &[u8],
        pi: Option<&[u8]>,
    ) -> Result<SparseMatrix> {
        let ir = decode_i32_slice(ir, self.byte_order)?;
        let jc = decode_i32_slice(jc, self.byte_order)?;
        let pr = decode_f64_slice(pr, self.byte_order)?;
        let pi = pi
            .map(|bytes| decode_f64_slice(bytes, self.byte_order))
            .transpose()?;

        // jc is validated in full by from_csc; only its last offset is needed
        // to trim nzmax-sized arrays
        let nnz = match jc.get(descriptor.cols()) {
            Some(&last) => usize::try_from(last).map_err(|_| MatError::InvalidArgument)?,
            None => return Err(MatError::InvalidArgument),
        };
        let ir = trim(&ir, nnz)?;
        let pr = trim(&pr, nnz)?;
        let pi = pi.as_deref().map(|pi| trim(pi, nnz)).transpose()?;

        let matrix = SparseMatrix::from_csc(descriptor, ir, &jc, pr, pi)?;
        tracing::debug!(
            name = matrix.name(),
            nnz = matrix.nnz(),
            cols = matrix.cols(),
            complex = matrix.is_complex(),
            "read sparse matrix"
        );
        Ok(matrix)
    }

    /// Decode sub-elements located by a [`WriteSummary`] inside `bytes`
    pub fn read_summary(
        &self,
        descriptor: &ArrayDescriptor,
        bytes: &[u8],
        summary: &WriteSummary,
    ) -> Result<SparseMatrix> {
        let required = |kind| block(bytes, summary, kind)?.ok_or(MatError::InvalidArgument);
        let ir = required(SubElementKind::RowIndices)?;
        let jc = required(SubElementKind::ColumnPointers)?;
        let pr = required(SubElementKind::RealValues)?;
        let pi = block(bytes, summary, SubElementKind::ImaginaryValues)?;
        self.read(descriptor, ir, jc, pr, pi)
    }
}

fn block<'a>(
    bytes: &'a [u8],
    summary: &WriteSummary,
    kind: SubElementKind,
) -> Result<Option<&'a [u8]>> {
    match summary.get(kind) {
        Some(written) => bytes
            .get(written.data_range())
            .map(Some)
            .ok_or(MatError::InvalidArgument),
        None => Ok(None),
    }
}

fn trim<T>(values: &[T], nnz: usize) -> Result<&[T]> {
    values.get(..nnz).ok_or(MatError::InvalidArgument)
}
