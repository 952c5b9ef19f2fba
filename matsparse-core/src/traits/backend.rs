//! Buffered output sink consumed by the sub-element writer

use crate::Result;

/// Resizable byte sink that exported arrays are written into
///
/// The core only relies on the current raw contents and size; how the sink
/// grows or flushes is up to the implementation (in-memory buffers,
/// memory-mapped regions, network streams, etc.).
pub trait BufferedOutput {
    /// Current raw contents of the sink
    fn as_slice(&self) -> &[u8];

    /// Current size of the sink in bytes
    ///
    /// Default implementation uses the slice length.
    fn size(&self) -> usize {
        self.as_slice().len()
    }

    /// Append bytes to the sink
    ///
    /// Sinks with a fixed capacity return
    /// [`MatError::InsufficientBuffer`](crate::MatError::InsufficientBuffer)
    /// instead of growing.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;
}
