//! Validation utilities for sparse array inputs
//!
//! Pure checks on shapes, coordinates and byte spans with no I/O.

pub mod bounds;
pub mod format;

pub use bounds::{
    validate_array_bounds, validate_coordinate, validate_dimensions, validate_exact_len,
};
pub use format::{align_to_boundary, calculate_padding, validate_alignment_boundary};
