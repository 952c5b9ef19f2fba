//! Error types for sparse matrix operations

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatError {
    /// Operation not available for this storage (e.g. imaginary part of a real matrix)
    UnsupportedOperation,
    /// Argument rejected by the callee (linear index, byte span, coordinate, buffer shape)
    InvalidArgument,
    /// Inserting a new coordinate would exceed an enforced capacity
    CapacityExceeded,
    /// Output sink cannot hold more data
    InsufficientBuffer,
}

/// Broad grouping of [`MatError`] kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller used the API in a way the storage does not allow
    Usage,
    /// Input data is malformed
    Data,
    /// A capacity or buffer limit was hit
    Resource,
}

impl MatError {
    /// Category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatError::UnsupportedOperation => ErrorCategory::Usage,
            MatError::InvalidArgument => ErrorCategory::Data,
            MatError::CapacityExceeded | MatError::InsufficientBuffer => ErrorCategory::Resource,
        }
    }
}

impl core::fmt::Display for MatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MatError::UnsupportedOperation => "Unsupported operation for this array",
            MatError::InvalidArgument => "Invalid argument",
            MatError::CapacityExceeded => "Maximum non-zero capacity exceeded",
            MatError::InsufficientBuffer => "Insufficient buffer space",
        };
        write!(f, "{msg}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatError>;
