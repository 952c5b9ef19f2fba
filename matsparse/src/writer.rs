//! Sub-element writer
//!
//! Encodes the compressed-column arrays of a matrix and appends them to a
//! [`BufferedOutput`] in the fixed order `ir`, `jc`, `pr`, `pi`. Framing
//! (tags, array headers, compression) belongs to the container encoder; the
//! returned [`WriteSummary`] tells it where each block landed.

use matsparse_core::codec::encode_slice;
use matsparse_core::validation::{calculate_padding, validate_alignment_boundary};
use matsparse_core::{
    BufferedOutput, ByteOrder, MatrixElement, Result, SparseMatrix, SubElement, SubElementKind,
};

use crate::config::WriterConfig;

/// Location of one written sub-element inside the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WrittenSubElement {
    /// Kind, element count and unpadded byte length
    pub sub_element: SubElement,
    /// Offset of the first byte in the sink
    pub offset: usize,
    /// Zero bytes appended after the data
    pub padding: usize,
}

impl WrittenSubElement {
    /// Byte range of the encoded data, excluding padding
    pub fn data_range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.sub_element.byte_len
    }
}

/// What a [`SparseWriter::write`] call appended
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteSummary {
    pub name: String,
    pub nnz: usize,
    pub byte_order: ByteOrder,
    /// In write order: `ir`, `jc`, `pr`, then `pi` for complex matrices
    pub sub_elements: Vec<WrittenSubElement>,
    /// Total bytes appended, padding included
    pub bytes_written: usize,
}

impl WriteSummary {
    /// Find the written block for a sub-element kind
    pub fn get(&self, kind: SubElementKind) -> Option<&WrittenSubElement> {
        self.sub_elements
            .iter()
            .find(|written| written.sub_element.kind == kind)
    }

    /// Serialize the summary as JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Writes sparse matrices into buffered outputs
#[derive(Debug, Clone, Default)]
pub struct SparseWriter {
    config: WriterConfig,
}

impl SparseWriter {
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Append the encoded `ir`, `jc`, `pr` (and `pi`) arrays of `matrix`
    ///
    /// Fails with `InvalidArgument` when padding is on and the configured
    /// alignment is not a power of two, before anything is written. Fails
    /// with `InsufficientBuffer` when the sink refuses to grow; blocks
    /// written before the failure stay in the sink.
    pub fn write<O: BufferedOutput>(
        &self,
        matrix: &SparseMatrix,
        out: &mut O,
    ) -> Result<WriteSummary> {
        if self.config.pad_to_alignment {
            validate_alignment_boundary(self.config.alignment)?;
        }
        let start = out.size();
        let arrays = matrix.export();
        let mut sub_elements = Vec::with_capacity(4);

        sub_elements.push(self.write_block(out, SubElementKind::RowIndices, &arrays.ir)?);
        sub_elements.push(self.write_block(out, SubElementKind::ColumnPointers, &arrays.jc)?);
        sub_elements.push(self.write_block(out, SubElementKind::RealValues, &arrays.pr)?);
        if let Some(pi) = &arrays.pi {
            sub_elements.push(self.write_block(out, SubElementKind::ImaginaryValues, pi)?);
        }

        let bytes_written = out.size() - start;
        tracing::debug!(
            name = matrix.name(),
            nnz = arrays.nnz(),
            cols = matrix.cols(),
            complex = matrix.is_complex(),
            bytes = bytes_written,
            "wrote sparse matrix"
        );

        Ok(WriteSummary {
            name: matrix.name().to_owned(),
            nnz: arrays.nnz(),
            byte_order: self.config.byte_order,
            sub_elements,
            bytes_written,
        })
    }

    fn write_block<O: BufferedOutput, T: MatrixElement>(
        &self,
        out: &mut O,
        kind: SubElementKind,
        values: &[T],
    ) -> Result<WrittenSubElement> {
        let sub_element = SubElement::new(kind, values.len());
        let offset = out.size();

        let mut bytes = Vec::with_capacity(sub_element.byte_len + self.config.alignment);
        encode_slice(values, self.config.byte_order, &mut bytes);
        let padding = if self.config.pad_to_alignment {
            calculate_padding(bytes.len(), self.config.alignment)
        } else {
            0
        };
        bytes.resize(bytes.len() + padding, 0);
        out.write_bytes(&bytes)?;

        tracing::trace!(
            kind = kind.label(),
            count = sub_element.element_count,
            offset,
            padding,
            "wrote sub-element"
        );

        Ok(WrittenSubElement {
            sub_element,
            offset,
            padding,
        })
    }
}
