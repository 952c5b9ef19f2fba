//! Sub-element layout helpers
//!
//! Pure arithmetic on offsets for padding encoded blocks to the container's
//! alignment boundary.

use crate::MatError;

/// Align an offset to a power-of-two boundary
pub const fn align_to_boundary(offset: usize, boundary: usize) -> usize {
    (offset + boundary - 1) & !(boundary - 1)
}

/// Validate that a boundary is a power of two
///
/// [`align_to_boundary`] relies on this; zero and other values fail with
/// [`MatError::InvalidArgument`].
pub const fn validate_alignment_boundary(boundary: usize) -> Result<(), MatError> {
    if boundary == 0 || (boundary & (boundary - 1)) != 0 {
        return Err(MatError::InvalidArgument);
    }
    Ok(())
}

/// Number of padding bytes needed to bring `offset` to `boundary`
pub const fn calculate_padding(offset: usize, boundary: usize) -> usize {
    align_to_boundary(offset, boundary) - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_to_boundary() {
        assert_eq!(align_to_boundary(0, 8), 0);
        assert_eq!(align_to_boundary(1, 8), 8);
        assert_eq!(align_to_boundary(7, 8), 8);
        assert_eq!(align_to_boundary(8, 8), 8);
        assert_eq!(align_to_boundary(9, 8), 16);
        assert_eq!(align_to_boundary(3, 4), 4);
    }

    #[test]
    fn test_calculate_padding() {
        assert_eq!(calculate_padding(0, 8), 0);
        assert_eq!(calculate_padding(1, 8), 7);
        // three int32 indices
        assert_eq!(calculate_padding(12, 8), 4);
        assert_eq!(calculate_padding(16, 8), 0);
    }

    #[test]
    fn test_validate_alignment_boundary() {
        for boundary in [1, 2, 4, 8, 4096] {
            assert_eq!(validate_alignment_boundary(boundary), Ok(()));
        }
        for boundary in [0, 3, 6, 12] {
            assert_eq!(
                validate_alignment_boundary(boundary),
                Err(MatError::InvalidArgument)
            );
        }
    }
}
