//! Column-major coordinate key

/// Matrix coordinate `(row, column)` ordered column-major
///
/// Keys compare by column first and row second. For any matrix with `rows`
/// rows and in-range keys this is the same order as the linear index
/// `column * rows + row`, which is the order compressed-column encoding
/// expects. Bounds are not checked here; the owning matrix validates
/// coordinates before creating keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexKey {
    // Field order drives the derived ordering.
    column: usize,
    row: usize,
}

impl IndexKey {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { column, row }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn column(&self) -> usize {
        self.column
    }

    /// Flat column-major index in a matrix with `row_count` rows
    pub const fn linear_index(&self, row_count: usize) -> u64 {
        self.column as u64 * row_count as u64 + self.row as u64
    }
}

impl core::fmt::Display for IndexKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}
