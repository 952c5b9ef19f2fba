//! Compressed-column export and import
//!
//! Export walks the occupied keys once in column-major order and produces the
//! four positionally aligned arrays the container stores: `ir` (row index per
//! entry), `jc` (per-column start offsets, `cols + 1` long), `pr` (real parts)
//! and `pi` (imaginary parts, complex matrices only).

use alloc::vec;
use alloc::vec::Vec;

use super::entry::Entry;
use super::key::IndexKey;
use super::matrix::SparseMatrix;
use crate::format::constants::{INDEX_WIDTH, VALUE_WIDTH};
use crate::format::ArrayDescriptor;
use crate::{MatError, Result};

/// Which compressed-column array a sub-element holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubElementKind {
    /// `ir`
    RowIndices,
    /// `jc`
    ColumnPointers,
    /// `pr`
    RealValues,
    /// `pi`
    ImaginaryValues,
}

impl SubElementKind {
    /// Encoded width of one element
    pub const fn element_width(self) -> usize {
        match self {
            SubElementKind::RowIndices | SubElementKind::ColumnPointers => INDEX_WIDTH,
            SubElementKind::RealValues | SubElementKind::ImaginaryValues => VALUE_WIDTH,
        }
    }

    /// Conventional short name
    pub const fn label(self) -> &'static str {
        match self {
            SubElementKind::RowIndices => "ir",
            SubElementKind::ColumnPointers => "jc",
            SubElementKind::RealValues => "pr",
            SubElementKind::ImaginaryValues => "pi",
        }
    }
}

/// Size of one exported array once encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubElement {
    pub kind: SubElementKind,
    pub element_count: usize,
    pub byte_len: usize,
}

impl SubElement {
    pub const fn new(kind: SubElementKind, element_count: usize) -> Self {
        Self {
            kind,
            element_count,
            byte_len: element_count * kind.element_width(),
        }
    }
}

/// The four compressed-column arrays of one matrix
#[derive(Debug, Clone, PartialEq)]
pub struct CscArrays {
    pub ir: Vec<i32>,
    pub jc: Vec<i32>,
    pub pr: Vec<f64>,
    /// Present iff the matrix is complex
    pub pi: Option<Vec<f64>>,
}

impl CscArrays {
    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.ir.len()
    }

    /// Sub-element sizes in on-disk order: `ir`, `jc`, `pr`, then `pi` if present
    pub fn sub_elements(&self) -> Vec<SubElement> {
        let mut elements = vec![
            SubElement::new(SubElementKind::RowIndices, self.ir.len()),
            SubElement::new(SubElementKind::ColumnPointers, self.jc.len()),
            SubElement::new(SubElementKind::RealValues, self.pr.len()),
        ];
        if let Some(pi) = &self.pi {
            elements.push(SubElement::new(SubElementKind::ImaginaryValues, pi.len()));
        }
        elements
    }
}

// Dimensions are capped at i32::MAX on construction, so row indices always
// fit; offsets in `jc` are bounded by nnz.

impl SparseMatrix {
    /// `ir`: row index of every occupied coordinate, column-major
    pub fn export_row_indices(&self) -> Vec<i32> {
        self.keys().map(|key| key.row() as i32).collect()
    }

    /// `jc`: `jc[j]` is the number of entries in columns before `j`
    ///
    /// The result has `cols + 1` elements and `jc[cols] == nnz`.
    pub fn export_column_pointers(&self) -> Vec<i32> {
        let mut jc = vec![0i32; self.cols() + 1];
        for key in self.keys() {
            jc[key.column() + 1] += 1;
        }
        for j in 1..jc.len() {
            jc[j] += jc[j - 1];
        }
        jc
    }

    /// `pr`: real part of every occupied coordinate, aligned with `ir`
    pub fn export_real_values(&self) -> Vec<f64> {
        self.iter().map(|(_, entry)| entry.real()).collect()
    }

    /// `pi`: imaginary part of every occupied coordinate, aligned with `ir`
    ///
    /// A real matrix yields all zeros.
    pub fn export_imaginary_values(&self) -> Vec<f64> {
        self.iter().map(|(_, entry)| entry.imaginary()).collect()
    }

    /// All arrays at once; `pi` is only produced for complex matrices
    pub fn export(&self) -> CscArrays {
        CscArrays {
            ir: self.export_row_indices(),
            jc: self.export_column_pointers(),
            pr: self.export_real_values(),
            pi: self.is_complex().then(|| self.export_imaginary_values()),
        }
    }

    /// Rebuild a matrix from decoded compressed-column arrays
    ///
    /// Fails with [`MatError::InvalidArgument`] unless `jc` has `cols + 1`
    /// non-decreasing offsets starting at 0 and ending at `ir.len()`, `pr`
    /// (and `pi`, present iff the descriptor is complex) match `ir` in
    /// length, and row indices are in range and strictly increasing within
    /// each column. The descriptor itself is checked as in
    /// [`SparseMatrix::from_descriptor`].
    pub fn from_csc(
        descriptor: &ArrayDescriptor,
        ir: &[i32],
        jc: &[i32],
        pr: &[f64],
        pi: Option<&[f64]>,
    ) -> Result<Self> {
        let mut matrix = SparseMatrix::from_descriptor(descriptor)?;
        let (rows, cols) = (matrix.rows(), matrix.cols());
        let nnz = ir.len();

        if jc.len() != cols + 1 || pr.len() != nnz {
            return Err(MatError::InvalidArgument);
        }
        match pi {
            Some(pi) if !descriptor.is_complex() || pi.len() != nnz => {
                return Err(MatError::InvalidArgument)
            }
            None if descriptor.is_complex() => return Err(MatError::InvalidArgument),
            _ => {}
        }
        if jc[0] != 0 || to_offset(jc[cols])? != nnz {
            return Err(MatError::InvalidArgument);
        }

        for col in 0..cols {
            let start = to_offset(jc[col])?;
            let end = to_offset(jc[col + 1])?;
            if start > end || end > nnz {
                return Err(MatError::InvalidArgument);
            }

            let mut previous_row = None;
            for k in start..end {
                let row = to_offset(ir[k])?;
                if row >= rows || previous_row.is_some_and(|prev| row <= prev) {
                    return Err(MatError::InvalidArgument);
                }
                previous_row = Some(row);

                let entry = match pi {
                    Some(pi) => Entry::Complex { re: pr[k], im: pi[k] },
                    None => Entry::Real(pr[k]),
                };
                matrix.insert_unchecked(IndexKey::new(row, col), entry);
            }
        }
        Ok(matrix)
    }
}

fn to_offset(value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| MatError::InvalidArgument)
}
