//! Array class, attribute flags and byte order definitions
//!
//! These are the pieces of the array header that the container decoder
//! resolves before a sparse array is materialized.

use super::constants::{class, flags};
use crate::{MatError, Result};

/// Array class codes as stored in the low byte of the flags word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ArrayClass {
    Cell = class::CELL,
    Struct = class::STRUCT,
    Object = class::OBJECT,
    Char = class::CHAR,
    Sparse = class::SPARSE,
    Double = class::DOUBLE,
    Single = class::SINGLE,
    Int8 = class::INT8,
    UInt8 = class::UINT8,
    Int16 = class::INT16,
    UInt16 = class::UINT16,
    Int32 = class::INT32,
    UInt32 = class::UINT32,
    Int64 = class::INT64,
    UInt64 = class::UINT64,
}

impl ArrayClass {
    /// Resolve a class code, rejecting unknown codes
    pub const fn from_u8(code: u8) -> Result<Self> {
        Ok(match code {
            class::CELL => ArrayClass::Cell,
            class::STRUCT => ArrayClass::Struct,
            class::OBJECT => ArrayClass::Object,
            class::CHAR => ArrayClass::Char,
            class::SPARSE => ArrayClass::Sparse,
            class::DOUBLE => ArrayClass::Double,
            class::SINGLE => ArrayClass::Single,
            class::INT8 => ArrayClass::Int8,
            class::UINT8 => ArrayClass::UInt8,
            class::INT16 => ArrayClass::Int16,
            class::UINT16 => ArrayClass::UInt16,
            class::INT32 => ArrayClass::Int32,
            class::UINT32 => ArrayClass::UInt32,
            class::INT64 => ArrayClass::Int64,
            class::UINT64 => ArrayClass::UInt64,
            _ => return Err(MatError::InvalidArgument),
        })
    }

    /// Raw class code
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for ArrayClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ArrayClass::Cell => "cell",
            ArrayClass::Struct => "struct",
            ArrayClass::Object => "object",
            ArrayClass::Char => "char",
            ArrayClass::Sparse => "sparse",
            ArrayClass::Double => "double",
            ArrayClass::Single => "single",
            ArrayClass::Int8 => "int8",
            ArrayClass::UInt8 => "uint8",
            ArrayClass::Int16 => "int16",
            ArrayClass::UInt16 => "uint16",
            ArrayClass::Int32 => "int32",
            ArrayClass::UInt32 => "uint32",
            ArrayClass::Int64 => "int64",
            ArrayClass::UInt64 => "uint64",
        };
        write!(f, "{name}")
    }
}

/// Attribute bit set from the array flags word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayFlags(u32);

impl ArrayFlags {
    /// No attributes set
    pub const EMPTY: Self = Self(0);
    /// Complex attribute only
    pub const COMPLEX: Self = Self(flags::COMPLEX);

    /// Build from the raw flags word, keeping only attribute bits
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & (flags::COMPLEX | flags::GLOBAL | flags::LOGICAL))
    }

    /// Raw attribute bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_complex(self) -> bool {
        self.0 & flags::COMPLEX != 0
    }

    pub const fn is_global(self) -> bool {
        self.0 & flags::GLOBAL != 0
    }

    pub const fn is_logical(self) -> bool {
        self.0 & flags::LOGICAL != 0
    }

    /// Return a copy with the complex bit set or cleared
    pub const fn with_complex(self, complex: bool) -> Self {
        if complex {
            Self(self.0 | flags::COMPLEX)
        } else {
            Self(self.0 & !flags::COMPLEX)
        }
    }

    /// Combine attributes with a class code into a full flags word
    pub const fn to_word(self, class: ArrayClass) -> u32 {
        self.0 | class.code() as u32
    }
}

/// Byte order of encoded values, decided by the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    #[default]
    Big,
    Little,
}

impl ByteOrder {
    /// Byte order of the running target
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::native()),
            (ByteOrder::Big, ByteOrder::Big) | (ByteOrder::Little, ByteOrder::Little)
        )
    }
}
