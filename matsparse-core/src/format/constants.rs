//! Format constants for the sparse array encoding

/// Width in bytes of one encoded double value (`pr`/`pi` elements)
pub const VALUE_WIDTH: usize = 8;

/// Width in bytes of one encoded index (`ir`/`jc` elements, int32 on disk)
pub const INDEX_WIDTH: usize = 4;

/// Default alignment boundary for sub-element blocks
pub const ALIGNMENT_BOUNDARY: usize = 8;

/// Largest dimension an int32 index array can address
pub const MAX_DIMENSION: usize = i32::MAX as usize;

/// Attribute flag bits carried in the array flags word
pub mod flags {
    /// Array holds an imaginary part
    pub const COMPLEX: u32 = 0x0800;
    /// Array is a global variable
    pub const GLOBAL: u32 = 0x0400;
    /// Array is logical (boolean)
    pub const LOGICAL: u32 = 0x0200;
    /// Mask selecting the class code from the flags word
    pub const CLASS_MASK: u32 = 0x00ff;
}

/// Array class codes
pub mod class {
    pub const CELL: u8 = 1;
    pub const STRUCT: u8 = 2;
    pub const OBJECT: u8 = 3;
    pub const CHAR: u8 = 4;
    pub const SPARSE: u8 = 5;
    pub const DOUBLE: u8 = 6;
    pub const SINGLE: u8 = 7;
    pub const INT8: u8 = 8;
    pub const UINT8: u8 = 9;
    pub const INT16: u8 = 10;
    pub const UINT16: u8 = 11;
    pub const INT32: u8 = 12;
    pub const UINT32: u8 = 13;
    pub const INT64: u8 = 14;
    pub const UINT64: u8 = 15;
}
