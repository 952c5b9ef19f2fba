//! Scalar element types that can be encoded into sub-elements
//!
//! Values (`pr`/`pi`) are 8-byte doubles and indices (`ir`/`jc`) are 4-byte
//! signed integers. Both are fixed width and encoded in the byte order the
//! container declares.

use crate::format::{ArrayClass, ByteOrder};
use crate::validation::validate_exact_len;
use crate::{MatError, Result};

/// Trait for fixed-width scalars stored in encoded arrays
///
/// `bytemuck::Pod` lets native-order slices be written without a per-element
/// conversion.
pub trait MatrixElement: bytemuck::Pod + PartialEq + core::fmt::Debug {
    /// Encoded width in bytes
    const WIDTH: usize;

    /// Class code of a dense array of this element type
    fn array_class() -> ArrayClass;

    /// Decode one element from exactly [`Self::WIDTH`] bytes
    ///
    /// Any other length fails with [`MatError::InvalidArgument`].
    fn read(bytes: &[u8], order: ByteOrder) -> Result<Self>;

    /// Encode one element into `out`, which must be [`Self::WIDTH`] bytes long
    fn write(self, order: ByteOrder, out: &mut [u8]);
}

impl MatrixElement for f64 {
    const WIDTH: usize = 8;

    fn array_class() -> ArrayClass {
        ArrayClass::Double
    }

    fn read(bytes: &[u8], order: ByteOrder) -> Result<Self> {
        validate_exact_len(bytes.len(), Self::WIDTH)?;
        let raw: [u8; 8] = bytes.try_into().map_err(|_| MatError::InvalidArgument)?;
        Ok(match order {
            ByteOrder::Big => f64::from_be_bytes(raw),
            ByteOrder::Little => f64::from_le_bytes(raw),
        })
    }

    fn write(self, order: ByteOrder, out: &mut [u8]) {
        let raw = match order {
            ByteOrder::Big => self.to_be_bytes(),
            ByteOrder::Little => self.to_le_bytes(),
        };
        out.copy_from_slice(&raw);
    }
}

impl MatrixElement for i32 {
    const WIDTH: usize = 4;

    fn array_class() -> ArrayClass {
        ArrayClass::Int32
    }

    fn read(bytes: &[u8], order: ByteOrder) -> Result<Self> {
        validate_exact_len(bytes.len(), Self::WIDTH)?;
        let raw: [u8; 4] = bytes.try_into().map_err(|_| MatError::InvalidArgument)?;
        Ok(match order {
            ByteOrder::Big => i32::from_be_bytes(raw),
            ByteOrder::Little => i32::from_le_bytes(raw),
        })
    }

    fn write(self, order: ByteOrder, out: &mut [u8]) {
        let raw = match order {
            ByteOrder::Big => self.to_be_bytes(),
            ByteOrder::Little => self.to_le_bytes(),
        };
        out.copy_from_slice(&raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_byte_orders() {
        let mut buf = [0u8; 8];
        1.0f64.write(ByteOrder::Big, &mut buf);
        assert_eq!(buf, [0x3f, 0xf0, 0, 0, 0, 0, 0, 0]);
        1.0f64.write(ByteOrder::Little, &mut buf);
        assert_eq!(buf, [0, 0, 0, 0, 0, 0, 0xf0, 0x3f]);
        assert_eq!(f64::read(&buf, ByteOrder::Little), Ok(1.0));
    }

    #[test]
    fn test_i32_read_write() {
        let mut buf = [0u8; 4];
        258i32.write(ByteOrder::Big, &mut buf);
        assert_eq!(buf, [0, 0, 1, 2]);
        assert_eq!(i32::read(&buf, ByteOrder::Big), Ok(258));
        assert_eq!(i32::read(&buf[..3], ByteOrder::Big), Err(MatError::InvalidArgument));
    }

    #[test]
    fn test_array_class() {
        assert_eq!(f64::array_class(), ArrayClass::Double);
        assert_eq!(i32::array_class(), ArrayClass::Int32);
    }
}
