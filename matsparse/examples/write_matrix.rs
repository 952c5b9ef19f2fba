//! Populate a complex sparse matrix, write its sub-elements and read them back

use matsparse::{
    BufferedOutput, ByteOrder, SparseMatrix, SparseReader, SparseWriter, VecOutput, WriterConfig,
};
use std::time::Instant;

fn main() -> matsparse::Result<()> {
    let nrows = 100_000;
    let ncols = 20_000;
    let sparse_cols = [10, 50, 100, 500, 900, 5000];
    let elements_per_col = 2_000;
    let nnz = sparse_cols.len() * elements_per_col;

    println!("Matrix dimensions: {nrows} x {ncols}");
    println!("Total non-zeros: {nnz}");

    let start = Instant::now();
    let mut matrix = SparseMatrix::new("demo", nrows, ncols, true, nnz)?;
    for &col in &sparse_cols {
        for row in (0..nrows).step_by(nrows / elements_per_col) {
            matrix.set_real(row as f64 + col as f64 * 0.1, row, col)?;
            if row % 3 == 0 {
                matrix.set_imaginary(-(row as f64), row, col)?;
            }
        }
    }
    println!("Populated {} entries in {:?}", matrix.nnz(), start.elapsed());

    let start = Instant::now();
    let config = WriterConfig::default().with_byte_order(ByteOrder::Little);
    let mut out = VecOutput::new();
    let summary = SparseWriter::new(config).write(&matrix, &mut out)?;
    println!("Wrote {} bytes in {:?}", out.size(), start.elapsed());
    for written in &summary.sub_elements {
        println!(
            "  {}: {} elements at offset {}",
            written.sub_element.kind.label(),
            written.sub_element.element_count,
            written.offset
        );
    }

    let start = Instant::now();
    let back = SparseReader::new(config.byte_order).read_summary(
        &matrix.descriptor(),
        out.as_slice(),
        &summary,
    )?;
    println!("Read back {} entries in {:?}", back.nnz(), start.elapsed());
    assert_eq!(back.export(), matrix.export());
    Ok(())
}
