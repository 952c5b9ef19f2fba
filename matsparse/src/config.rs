//! Writer configuration

use matsparse_core::format::constants::ALIGNMENT_BOUNDARY;
use matsparse_core::ByteOrder;

/// Configuration for [`SparseWriter`](crate::SparseWriter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriterConfig {
    /// Byte order for every encoded element
    pub byte_order: ByteOrder,
    /// Pad each sub-element with zeros to the alignment boundary
    pub pad_to_alignment: bool,
    /// Alignment boundary in bytes; the writer rejects values that are not a
    /// power of two while padding is on
    pub alignment: usize,
}

impl WriterConfig {
    /// Set the byte order
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Enable or disable sub-element padding
    pub fn with_padding(mut self, pad_to_alignment: bool) -> Self {
        self.pad_to_alignment = pad_to_alignment;
        self
    }

    /// Set the alignment boundary; values that are not a power of two are
    /// rounded up to the next one
    pub fn with_alignment(mut self, alignment: usize) -> Self {
        self.alignment = alignment.max(1).next_power_of_two();
        self
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Big,
            pad_to_alignment: true,
            alignment: ALIGNMENT_BOUNDARY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = WriterConfig::default()
            .with_byte_order(ByteOrder::Little)
            .with_padding(false)
            .with_alignment(6);
        assert_eq!(config.byte_order, ByteOrder::Little);
        assert!(!config.pad_to_alignment);
        assert_eq!(config.alignment, 8);

        assert_eq!(WriterConfig::default().with_alignment(0).alignment, 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_json() {
        let config = WriterConfig::default().with_byte_order(ByteOrder::Little);
        let json = serde_json::to_string(&config).unwrap();
        let back: WriterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
