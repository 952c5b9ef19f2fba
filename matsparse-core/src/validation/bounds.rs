//! Shape, coordinate and byte span validation
//!
//! Pure checks with no I/O. Every failure maps to
//! [`MatError::InvalidArgument`].

use crate::format::constants::MAX_DIMENSION;
use crate::MatError;

/// Validate that a byte span holds a whole number of `width`-byte elements
///
/// Returns the element count.
pub const fn validate_array_bounds(byte_len: usize, width: usize) -> Result<usize, MatError> {
    if width == 0 || byte_len % width != 0 {
        return Err(MatError::InvalidArgument);
    }
    Ok(byte_len / width)
}

/// Validate that a byte span is exactly `expected` bytes long
pub const fn validate_exact_len(byte_len: usize, expected: usize) -> Result<(), MatError> {
    if byte_len != expected {
        return Err(MatError::InvalidArgument);
    }
    Ok(())
}

/// Validate a sparse shape: exactly two dimensions, each addressable by an int32 index
pub const fn validate_dimensions(dims: &[usize]) -> Result<(), MatError> {
    if dims.len() != 2 {
        return Err(MatError::InvalidArgument);
    }
    if dims[0] > MAX_DIMENSION || dims[1] > MAX_DIMENSION {
        return Err(MatError::InvalidArgument);
    }
    Ok(())
}

/// Validate that `(row, col)` lies inside a `rows x cols` matrix
pub const fn validate_coordinate(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<(), MatError> {
    if row >= rows || col >= cols {
        return Err(MatError::InvalidArgument);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_array_bounds() {
        assert_eq!(validate_array_bounds(16, 4), Ok(4));
        assert_eq!(validate_array_bounds(24, 8), Ok(3));
        assert_eq!(validate_array_bounds(0, 8), Ok(0));

        assert_eq!(validate_array_bounds(15, 4), Err(MatError::InvalidArgument));
        assert_eq!(validate_array_bounds(23, 8), Err(MatError::InvalidArgument));
        assert_eq!(validate_array_bounds(8, 0), Err(MatError::InvalidArgument));
    }

    #[test]
    fn test_validate_exact_len() {
        assert_eq!(validate_exact_len(8, 8), Ok(()));
        for len in [0, 7, 9, 16] {
            assert_eq!(validate_exact_len(len, 8), Err(MatError::InvalidArgument));
        }
    }

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(validate_dimensions(&[3, 3]), Ok(()));
        assert_eq!(validate_dimensions(&[0, 0]), Ok(()));
        assert_eq!(validate_dimensions(&[3]), Err(MatError::InvalidArgument));
        assert_eq!(validate_dimensions(&[1, 2, 3]), Err(MatError::InvalidArgument));
        assert_eq!(
            validate_dimensions(&[MAX_DIMENSION + 1, 1]),
            Err(MatError::InvalidArgument)
        );
    }

    #[test]
    fn test_validate_coordinate() {
        assert_eq!(validate_coordinate(0, 0, 3, 3), Ok(()));
        assert_eq!(validate_coordinate(2, 2, 3, 3), Ok(()));
        assert_eq!(validate_coordinate(3, 0, 3, 3), Err(MatError::InvalidArgument));
        assert_eq!(validate_coordinate(0, 3, 3, 3), Err(MatError::InvalidArgument));
        assert_eq!(validate_coordinate(0, 0, 0, 0), Err(MatError::InvalidArgument));
    }
}
