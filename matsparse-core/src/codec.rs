//! Binary codec for encoded scalars and arrays
//!
//! One value is one IEEE-754 double (8 bytes). The byte order is whatever the
//! container declared; this module never guesses it.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::format::constants::VALUE_WIDTH;
use crate::format::ByteOrder;
use crate::traits::MatrixElement;
use crate::Result;
#[cfg(feature = "alloc")]
use crate::validation::validate_array_bounds;

/// Decode one double from exactly 8 bytes
///
/// Fails with [`MatError::InvalidArgument`](crate::MatError::InvalidArgument)
/// for any other length.
pub fn decode(bytes: &[u8], order: ByteOrder) -> Result<f64> {
    f64::read(bytes, order)
}

/// Encode one double into 8 bytes
pub fn encode(value: f64, order: ByteOrder) -> [u8; VALUE_WIDTH] {
    let mut out = [0u8; VALUE_WIDTH];
    value.write(order, &mut out);
    out
}

/// Append the encoding of `values` to `out`
#[cfg(feature = "alloc")]
pub fn encode_slice<T: MatrixElement>(values: &[T], order: ByteOrder, out: &mut Vec<u8>) {
    if order.is_native() {
        out.extend_from_slice(bytemuck::cast_slice(values));
        return;
    }

    let start = out.len();
    out.resize(start + values.len() * T::WIDTH, 0);
    for (value, chunk) in values.iter().zip(out[start..].chunks_exact_mut(T::WIDTH)) {
        value.write(order, chunk);
    }
}

/// Decode a byte span holding a whole number of elements
#[cfg(feature = "alloc")]
pub fn decode_slice<T: MatrixElement>(bytes: &[u8], order: ByteOrder) -> Result<Vec<T>> {
    let count = validate_array_bounds(bytes.len(), T::WIDTH)?;
    let mut values = Vec::with_capacity(count);
    for chunk in bytes.chunks_exact(T::WIDTH) {
        values.push(T::read(chunk, order)?);
    }
    Ok(values)
}

#[cfg(feature = "alloc")]
pub fn encode_f64_slice(values: &[f64], order: ByteOrder, out: &mut Vec<u8>) {
    encode_slice(values, order, out)
}

#[cfg(feature = "alloc")]
pub fn encode_i32_slice(values: &[i32], order: ByteOrder, out: &mut Vec<u8>) {
    encode_slice(values, order, out)
}

#[cfg(feature = "alloc")]
pub fn decode_f64_slice(bytes: &[u8], order: ByteOrder) -> Result<Vec<f64>> {
    decode_slice(bytes, order)
}

#[cfg(feature = "alloc")]
pub fn decode_i32_slice(bytes: &[u8], order: ByteOrder) -> Result<Vec<i32>> {
    decode_slice(bytes, order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatError;

    const ORDERS: [ByteOrder; 2] = [ByteOrder::Big, ByteOrder::Little];

    #[test]
    fn test_round_trip_is_bit_exact() {
        let specials = [
            0.0,
            -0.0,
            1.5,
            -2.25e-300,
            f64::MIN_POSITIVE,
            f64::MAX,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NAN,
            f64::from_bits(0x7ff8_0000_dead_beef),
        ];
        for order in ORDERS {
            for value in specials {
                let decoded = decode(&encode(value, order), order).unwrap();
                assert_eq!(decoded.to_bits(), value.to_bits(), "{value} {order:?}");
            }
        }
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let bytes = [0u8; 16];
        for len in [0, 7, 9, 16] {
            assert_eq!(decode(&bytes[..len], ByteOrder::Big), Err(MatError::InvalidArgument));
        }
    }

    #[test]
    fn test_encode_big_endian_layout() {
        assert_eq!(encode(-2.0, ByteOrder::Big), [0xc0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode(-2.0, ByteOrder::Little), [0, 0, 0, 0, 0, 0, 0, 0xc0]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_slices_match_single_element_codec() {
        let values = [1.0, -0.0, f64::INFINITY];
        for order in ORDERS {
            let mut out = Vec::new();
            encode_f64_slice(&values, order, &mut out);
            assert_eq!(out.len(), 24);
            assert_eq!(&out[8..16], &encode(-0.0, order));

            let back = decode_f64_slice(&out, order).unwrap();
            assert_eq!(back.len(), 3);
            for (a, b) in back.iter().zip(values.iter()) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_index_slices() {
        let mut out = Vec::new();
        encode_i32_slice(&[0, 1, 2], ByteOrder::Big, &mut out);
        assert_eq!(out, [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2]);
        assert_eq!(decode_i32_slice(&out, ByteOrder::Big), Ok(alloc::vec![0, 1, 2]));
        assert_eq!(
            decode_i32_slice(&out[..11], ByteOrder::Big),
            Err(MatError::InvalidArgument)
        );
    }
}
