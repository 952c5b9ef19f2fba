//! Array descriptor handed over by the container decoder

use alloc::string::String;

use super::constants::flags::CLASS_MASK;
use super::header::{ArrayClass, ArrayFlags};
use crate::validation::validate_dimensions;
use crate::{MatError, Result};

/// Name, shape, attributes and capacity of a sparse array
///
/// A descriptor is supplied once when the array is created and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayDescriptor {
    /// Variable name
    pub name: String,
    /// Row and column counts
    pub dims: [usize; 2],
    /// Attribute flags (complex, global, logical)
    pub flags: ArrayFlags,
    /// Class code, always [`ArrayClass::Sparse`] for descriptors built here
    pub class: ArrayClass,
    /// Declared maximum number of non-zero entries
    pub nzmax: usize,
}

impl ArrayDescriptor {
    /// Describe a sparse array
    pub fn sparse(
        name: impl Into<String>,
        rows: usize,
        cols: usize,
        flags: ArrayFlags,
        nzmax: usize,
    ) -> Result<Self> {
        validate_dimensions(&[rows, cols])?;
        Ok(Self {
            name: name.into(),
            dims: [rows, cols],
            flags,
            class: ArrayClass::Sparse,
            nzmax,
        })
    }

    /// Build from the raw values a decoder reads out of the array header
    ///
    /// `flags_word` carries the class code in its low byte and the attribute
    /// bits above it.
    pub fn from_raw(
        name: impl Into<String>,
        dims: &[usize],
        flags_word: u32,
        nzmax: usize,
    ) -> Result<Self> {
        let class = ArrayClass::from_u8((flags_word & CLASS_MASK) as u8)?;
        if class != ArrayClass::Sparse {
            return Err(MatError::UnsupportedOperation);
        }
        validate_dimensions(dims)?;
        Self::sparse(name, dims[0], dims[1], ArrayFlags::from_bits(flags_word), nzmax)
    }

    pub fn rows(&self) -> usize {
        self.dims[0]
    }

    pub fn cols(&self) -> usize {
        self.dims[1]
    }

    pub fn is_complex(&self) -> bool {
        self.flags.is_complex()
    }

    /// Full flags word (attributes plus class code)
    pub fn flags_word(&self) -> u32 {
        self.flags.to_word(self.class)
    }
}
