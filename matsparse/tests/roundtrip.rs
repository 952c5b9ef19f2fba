use std::collections::HashMap;

use matsparse::{
    BufferedOutput, ByteOrder, IndexKey, MatError, NumericArray, SparseMatrix, SparseReader,
    SparseWriter, VecOutput, WriterConfig,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Populate a matrix with random assignments, tracking what was written
fn random_matrix(
    rng: &mut StdRng,
    rows: usize,
    cols: usize,
    complex: bool,
    writes: usize,
) -> (SparseMatrix, HashMap<(usize, usize), (f64, f64)>) {
    let mut matrix = SparseMatrix::new("R", rows, cols, complex, writes).unwrap();
    let mut expected = HashMap::new();

    for _ in 0..writes {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        let value: f64 = rng.gen_range(-100.0..100.0);
        let slot = expected.entry((row, col)).or_insert((0.0, 0.0));
        if complex && rng.gen_bool(0.5) {
            matrix.set_imaginary(value, row, col).unwrap();
            slot.1 = value;
        } else {
            matrix.set_real(value, row, col).unwrap();
            slot.0 = value;
        }
    }
    (matrix, expected)
}

#[test]
fn test_nnz_counts_distinct_coordinates() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let (matrix, expected) = random_matrix(&mut rng, 6, 5, true, 40);
        assert_eq!(matrix.nnz(), expected.len());
        assert_eq!(matrix.export_column_pointers()[matrix.cols()] as usize, matrix.nnz());

        for row in 0..6 {
            for col in 0..5 {
                let (re, im) = expected.get(&(row, col)).copied().unwrap_or((0.0, 0.0));
                assert_eq!(matrix.get_real(row, col), re);
                assert_eq!(matrix.get_imaginary(row, col), im);
            }
        }
    }
}

#[test]
fn test_exports_are_aligned_and_column_major() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let (matrix, _) = random_matrix(&mut rng, 9, 7, true, 30);
        let arrays = matrix.export();
        let pi = arrays.pi.as_ref().unwrap();
        assert_eq!(arrays.ir.len(), arrays.pr.len());
        assert_eq!(arrays.ir.len(), pi.len());
        assert_eq!(arrays.jc.len(), matrix.cols() + 1);

        // Recover each position's column from jc and check ordering + values
        let mut keys = Vec::new();
        for col in 0..matrix.cols() {
            let (start, end) = (arrays.jc[col] as usize, arrays.jc[col + 1] as usize);
            assert!(start <= end);
            for k in start..end {
                let row = arrays.ir[k] as usize;
                assert_eq!(arrays.pr[k], matrix.get_real(row, col));
                assert_eq!(pi[k], matrix.get_imaginary(row, col));
                keys.push(IndexKey::new(row, col));
            }
        }
        assert_eq!(keys.len(), matrix.nnz());
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].linear_index(matrix.rows()) < pair[1].linear_index(matrix.rows()));
        }
    }
}

#[test]
fn test_write_read_round_trip() {
    let mut rng = StdRng::seed_from_u64(23);
    for order in [ByteOrder::Big, ByteOrder::Little] {
        for complex in [false, true] {
            let (matrix, _) = random_matrix(&mut rng, 12, 10, complex, 50);
            let writer = SparseWriter::new(WriterConfig::default().with_byte_order(order));

            let mut out = VecOutput::new();
            let summary = writer.write(&matrix, &mut out).unwrap();
            assert_eq!(summary.bytes_written, out.size());
            assert_eq!(out.size() % 8, 0);

            let back = SparseReader::new(order)
                .read_summary(&matrix.descriptor(), out.as_slice(), &summary)
                .unwrap();
            assert_eq!(back.export(), matrix.export());
            assert_eq!(back.name(), matrix.name());
        }
    }
}

#[test]
fn test_overwrite_scenario() {
    let mut matrix = SparseMatrix::new("S", 3, 3, false, 3).unwrap();
    matrix.set_real(5.0, 2, 0).unwrap();
    matrix.set_real(7.0, 0, 2).unwrap();
    assert_eq!(matrix.export_row_indices(), [2, 0]);
    assert_eq!(matrix.export_column_pointers(), [0, 0, 1, 2]);
    assert_eq!(matrix.export_real_values(), [5.0, 7.0]);

    assert_eq!(matrix.get_real(1, 1), 0.0);
    matrix.set_real(1.0, 1, 1).unwrap();
    matrix.set_real(2.0, 1, 1).unwrap();
    assert_eq!(matrix.get_real(1, 1), 2.0);
    assert_eq!(matrix.nnz(), 3);
}

#[test]
fn test_generic_array_access() {
    fn fill<A: NumericArray<Element = f64>>(array: &mut A) -> Result<(), MatError> {
        let (rows, cols) = array.dimensions();
        for col in 0..cols {
            array.set_real((col * rows) as f64 + 1.0, col % rows, col)?;
        }
        Ok(())
    }

    let mut matrix = SparseMatrix::new("G", 2, 4, false, 4).unwrap();
    fill(&mut matrix).unwrap();
    assert_eq!(matrix.nnz(), 4);
    assert_eq!(matrix.export_row_indices(), [0, 1, 0, 1]);
    assert_eq!(
        NumericArray::get_real_at(&matrix, 0),
        Err(MatError::InvalidArgument)
    );
}
