//! Numeric array access shared by dense and sparse storage
//!
//! Dense arrays support both flat (column-major linear) and two-coordinate
//! addressing. Sparse storage only supports the coordinate form and rejects
//! the linear accessors.

use super::element::MatrixElement;
use crate::Result;

/// Element access for two-dimensional numeric arrays
pub trait NumericArray {
    /// The scalar type stored in this array
    type Element: MatrixElement;

    /// Get array dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Whether the array carries an imaginary part
    fn is_complex(&self) -> bool;

    /// Real part at `(row, col)`, zero when nothing is stored
    fn get_real(&self, row: usize, col: usize) -> Self::Element;

    /// Imaginary part at `(row, col)`, zero when nothing is stored
    fn get_imaginary(&self, row: usize, col: usize) -> Self::Element;

    /// Store the real part at `(row, col)`
    fn set_real(&mut self, value: Self::Element, row: usize, col: usize) -> Result<()>;

    /// Store the imaginary part at `(row, col)`
    fn set_imaginary(&mut self, value: Self::Element, row: usize, col: usize) -> Result<()>;

    /// Real part at a flat column-major index
    fn get_real_at(&self, index: usize) -> Result<Self::Element>;

    /// Imaginary part at a flat column-major index
    fn get_imaginary_at(&self, index: usize) -> Result<Self::Element>;

    /// Store the real part at a flat column-major index
    fn set_real_at(&mut self, value: Self::Element, index: usize) -> Result<()>;

    /// Store the imaginary part at a flat column-major index
    fn set_imaginary_at(&mut self, value: Self::Element, index: usize) -> Result<()>;
}
