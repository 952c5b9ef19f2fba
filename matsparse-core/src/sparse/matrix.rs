//! Coordinate-addressed sparse matrix storage
//!
//! Entries live in a single ordered map from [`IndexKey`] to [`Entry`]. The
//! map's key set is the occupied set, and iterating it yields coordinates in
//! column-major order, which is what compressed-column export walks.

use alloc::collections::btree_map::{self, BTreeMap};
use alloc::string::String;

use super::entry::Entry;
use super::key::IndexKey;
use crate::format::{ArrayClass, ArrayDescriptor, ArrayFlags};
use crate::traits::NumericArray;
use crate::validation::{validate_coordinate, validate_dimensions};
use crate::{MatError, Result};

/// How the declared maximum non-zero count is treated on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapacityPolicy {
    /// Capacity is metadata only; inserts are never rejected
    #[default]
    Informational,
    /// Inserting a new coordinate once `nnz == max_non_zero` fails with
    /// [`MatError::CapacityExceeded`]. Overwrites are always allowed.
    Enforced,
}

/// Behavioural options for a [`SparseMatrix`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseOptions {
    pub capacity_policy: CapacityPolicy,
}

impl SparseOptions {
    /// Set the capacity policy
    pub fn with_capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.capacity_policy = policy;
        self
    }
}

/// Two-dimensional sparse matrix of (optionally complex) doubles
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    name: String,
    rows: usize,
    cols: usize,
    flags: ArrayFlags,
    nzmax: usize,
    options: SparseOptions,
    entries: BTreeMap<IndexKey, Entry>,
}

impl SparseMatrix {
    /// Create an empty matrix
    ///
    /// Fails with [`MatError::InvalidArgument`] when a dimension cannot be
    /// addressed by an int32 index.
    pub fn new(
        name: impl Into<String>,
        rows: usize,
        cols: usize,
        complex: bool,
        nzmax: usize,
    ) -> Result<Self> {
        validate_dimensions(&[rows, cols])?;
        Ok(Self {
            name: name.into(),
            rows,
            cols,
            flags: ArrayFlags::EMPTY.with_complex(complex),
            nzmax,
            options: SparseOptions::default(),
            entries: BTreeMap::new(),
        })
    }

    /// Create an empty matrix from decoder metadata
    ///
    /// The descriptor's fields are public, so its shape and class are checked
    /// again here: dimensions beyond int32 indexing fail with
    /// [`MatError::InvalidArgument`], a class other than
    /// [`ArrayClass::Sparse`] with [`MatError::UnsupportedOperation`].
    pub fn from_descriptor(descriptor: &ArrayDescriptor) -> Result<Self> {
        validate_dimensions(&descriptor.dims)?;
        if descriptor.class != ArrayClass::Sparse {
            return Err(MatError::UnsupportedOperation);
        }
        Ok(Self {
            name: descriptor.name.clone(),
            rows: descriptor.rows(),
            cols: descriptor.cols(),
            flags: descriptor.flags,
            nzmax: descriptor.nzmax,
            options: SparseOptions::default(),
            entries: BTreeMap::new(),
        })
    }

    /// Replace the options
    pub fn with_options(mut self, options: SparseOptions) -> Self {
        self.options = options;
        self
    }

    /// Variable name carried into the container
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether imaginary parts are stored
    pub fn is_complex(&self) -> bool {
        self.flags.is_complex()
    }

    /// Attribute flags reported in the descriptor
    pub fn flags(&self) -> ArrayFlags {
        self.flags
    }

    /// Behavioural options in effect
    pub fn options(&self) -> SparseOptions {
        self.options
    }

    /// Declared maximum number of non-zero entries
    pub fn max_non_zero(&self) -> usize {
        self.nzmax
    }

    /// Number of occupied coordinates
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a value was ever assigned at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&IndexKey::new(row, col))
    }

    /// Stored entry at `(row, col)`, if any
    pub fn entry(&self, row: usize, col: usize) -> Option<Entry> {
        self.entries.get(&IndexKey::new(row, col)).copied()
    }

    /// Real part at `(row, col)`, `0.0` when nothing is stored
    pub fn get_real(&self, row: usize, col: usize) -> f64 {
        self.entry(row, col).map_or(0.0, |entry| entry.real())
    }

    /// Imaginary part at `(row, col)`, `0.0` when nothing is stored
    pub fn get_imaginary(&self, row: usize, col: usize) -> f64 {
        self.entry(row, col).map_or(0.0, |entry| entry.imaginary())
    }

    /// Store the real part at `(row, col)`
    ///
    /// An imaginary part already stored at the coordinate is kept.
    pub fn set_real(&mut self, value: f64, row: usize, col: usize) -> Result<()> {
        validate_coordinate(row, col, self.rows, self.cols)?;
        self.upsert(IndexKey::new(row, col), Entry::Real(value), |entry| {
            entry.with_real(value)
        })
    }

    /// Store the imaginary part at `(row, col)`
    ///
    /// Fails with [`MatError::UnsupportedOperation`] on a real matrix.
    pub fn set_imaginary(&mut self, value: f64, row: usize, col: usize) -> Result<()> {
        if !self.is_complex() {
            return Err(MatError::UnsupportedOperation);
        }
        validate_coordinate(row, col, self.rows, self.cols)?;
        self.upsert(IndexKey::new(row, col), Entry::Imaginary(value), |entry| {
            entry.with_imaginary(value)
        })
    }

    fn upsert(
        &mut self,
        key: IndexKey,
        fresh: Entry,
        update: impl FnOnce(Entry) -> Entry,
    ) -> Result<()> {
        if let Some(entry) = self.entries.get_mut(&key) {
            *entry = update(*entry);
            return Ok(());
        }

        if self.options.capacity_policy == CapacityPolicy::Enforced
            && self.entries.len() >= self.nzmax
        {
            return Err(MatError::CapacityExceeded);
        }
        self.entries.insert(key, fresh);
        Ok(())
    }

    /// Occupied coordinates and their entries in column-major order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Occupied coordinates in column-major order
    pub fn keys(&self) -> impl ExactSizeIterator<Item = IndexKey> + '_ {
        self.entries.keys().copied()
    }

    /// Format metadata for the encoder
    ///
    /// `nzmax` is reported as at least `nnz` so an encoder sizing its
    /// buffers from it never under-allocates.
    pub fn descriptor(&self) -> ArrayDescriptor {
        ArrayDescriptor {
            name: self.name.clone(),
            dims: [self.rows, self.cols],
            flags: self.flags,
            class: crate::format::ArrayClass::Sparse,
            nzmax: self.nzmax.max(self.nnz()),
        }
    }

    pub(crate) fn insert_unchecked(&mut self, key: IndexKey, entry: Entry) {
        self.entries.insert(key, entry);
    }
}

/// Column-major iterator over occupied entries
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, IndexKey, Entry>,
}

impl Iterator for Iter<'_> {
    type Item = (IndexKey, Entry);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, entry)| (*key, *entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SparseMatrix {
    type Item = (IndexKey, Entry);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl NumericArray for SparseMatrix {
    type Element = f64;

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn is_complex(&self) -> bool {
        SparseMatrix::is_complex(self)
    }

    fn get_real(&self, row: usize, col: usize) -> f64 {
        SparseMatrix::get_real(self, row, col)
    }

    fn get_imaginary(&self, row: usize, col: usize) -> f64 {
        SparseMatrix::get_imaginary(self, row, col)
    }

    fn set_real(&mut self, value: f64, row: usize, col: usize) -> Result<()> {
        SparseMatrix::set_real(self, value, row, col)
    }

    fn set_imaginary(&mut self, value: f64, row: usize, col: usize) -> Result<()> {
        SparseMatrix::set_imaginary(self, value, row, col)
    }

    // Sparse storage has no flat addressing; callers must use (row, col).

    fn get_real_at(&self, _index: usize) -> Result<f64> {
        Err(MatError::InvalidArgument)
    }

    fn get_imaginary_at(&self, _index: usize) -> Result<f64> {
        Err(MatError::InvalidArgument)
    }

    fn set_real_at(&mut self, _value: f64, _index: usize) -> Result<()> {
        Err(MatError::InvalidArgument)
    }

    fn set_imaginary_at(&mut self, _value: f64, _index: usize) -> Result<()> {
        Err(MatError::InvalidArgument)
    }
}

/// Diagnostic listing of occupied entries, one `(row,col)` per line
impl core::fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{} = ", self.name)?;
        for (key, entry) in self.iter() {
            write!(f, "\t{key}\t{:?}", entry.real())?;
            if self.is_complex() {
                write!(f, "+{:?}", entry.imaginary())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
