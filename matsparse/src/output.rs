//! In-memory buffered output
//!
//! [`VecOutput`] is a growable byte buffer implementing
//! [`BufferedOutput`]. An optional byte limit turns it into a fixed-capacity
//! sink that refuses writes past the limit.

use std::io;

use matsparse_core::{BufferedOutput, MatError, Result};

/// Growable in-memory sink
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecOutput {
    buf: Vec<u8>,
    limit: Option<usize>,
}

impl VecOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            limit: None,
        }
    }

    /// Refuse to grow past `limit` bytes
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Bytes that can still be written before hitting the limit
    pub fn remaining(&self) -> Option<usize> {
        self.limit.map(|limit| limit.saturating_sub(self.buf.len()))
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

impl BufferedOutput for VecOutput {
    fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if let Some(remaining) = self.remaining() {
            if bytes.len() > remaining {
                return Err(MatError::InsufficientBuffer);
            }
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }
}

impl io::Write for VecOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)
            .map_err(|err| io::Error::new(io::ErrorKind::WriteZero, err))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_write_and_size() {
        let mut out = VecOutput::new();
        assert_eq!(out.size(), 0);
        out.write_bytes(&[1, 2, 3]).unwrap();
        out.write_bytes(&[4]).unwrap();
        assert_eq!(out.size(), 4);
        assert_eq!(out.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(out.remaining(), None);

        out.clear();
        assert_eq!(out.size(), 0);
    }

    #[test]
    fn test_limit() {
        let mut out = VecOutput::with_capacity(8).with_limit(4);
        out.write_bytes(&[0; 3]).unwrap();
        assert_eq!(out.remaining(), Some(1));
        assert_eq!(out.write_bytes(&[0; 2]), Err(MatError::InsufficientBuffer));
        // Failed write leaves contents untouched
        assert_eq!(out.size(), 3);
        out.write_bytes(&[9]).unwrap();
        assert_eq!(out.into_inner(), vec![0, 0, 0, 9]);
    }

    #[test]
    fn test_io_write() {
        let mut out = VecOutput::new().with_limit(2);
        out.write_all(&[1, 2]).unwrap();
        let err = out.write(&[3]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    }
}
