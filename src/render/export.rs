// src/render/export.rs

//! CSV export of sweep results.

use crate::sweep::{SweepMatrix, SweepTable};
use anyhow::{Context, Result};
use std::io::Write;

/// Write `vol,call,put` records, one per table row, with a header.
pub fn write_table_csv<W: Write>(table: &SweepTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["vol", "call", "put"])?;
    for row in table {
        wtr.write_record(&[
            row.vol.to_string(),
            row.result.call.to_string(),
            row.result.put.to_string(),
        ])?;
    }
    wtr.flush().context("failed to flush table csv")?;
    Ok(())
}

/// Write the matrix as a labelled grid.
///
/// The header is `vol\strike` followed by the strike labels; each record starts
/// with the vol label and carries that row's values in full precision.  An empty
/// matrix still produces the header record.
pub fn write_matrix_csv<W: Write>(matrix: &SweepMatrix, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![format!("vol\\strike ({})", matrix.kind)];
    header.extend(matrix.col_labels());
    wtr.write_record(&header)?;

    for (label, row) in matrix.row_labels().into_iter().zip(matrix.rows()) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(label);
        record.extend(row.iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush().context("failed to flush matrix csv")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bs::PnlKind;

    #[test]
    fn matrix_csv_has_header_and_one_record_per_row() {
        let m = SweepMatrix {
            kind: PnlKind::Call,
            vol_values: vec![0.1, 0.2],
            strike_values: vec![40.0, 42.5],
            values: vec![vec![1.5, -2.0], vec![3.0, 4.25]],
        };
        let mut buf = Vec::new();
        write_matrix_csv(&m, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "vol\\strike (call),40,42.5");
        assert_eq!(lines[1], "10%,1.5,-2");
        assert_eq!(lines[2], "20%,3,4.25");
    }
}
