//! Writes annotated records as CSV.

use crate::pipeline::AnnotatedRecord;
use std::io::Write;

/// Column names of the exported table: headword, reading, furigana, flags.
pub const HEADER: [&str; 4] = ["語彙", "読み方", "振り仮名", "変換フラグ"];

/// Writes a header row and one row per record.
pub fn write_csv<W: Write>(mut wtr: W, records: &[AnnotatedRecord]) -> std::io::Result<()> {
    write_row(&mut wtr, HEADER)?;
    for record in records {
        let flags = record.flags.to_string();
        write_row(
            &mut wtr,
            [
                record.headword.as_str(),
                record.yomi.as_str(),
                record.furigana.as_str(),
                flags.as_str(),
            ],
        )?;
    }
    wtr.flush()
}

fn write_row<W: Write>(wtr: &mut W, cells: [&str; 4]) -> std::io::Result<()> {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            wtr.write_all(b",")?;
        }
        if !cell.is_empty() {
            quote_csv_cell(&mut *wtr, cell.as_bytes())?;
        }
    }
    wtr.write_all(b"\n")
}

// quotes the cell only if it contains a delimiter, quote or line break
fn quote_csv_cell<W: Write>(mut wtr: W, mut data: &[u8]) -> std::io::Result<()> {
    let mut output = [0; 4096];
    let mut writer = csv_core::Writer::new();
    loop {
        let (result, nin, nout) = writer.field(data, &mut output);
        wtr.write_all(&output[..nout])?;
        if result == csv_core::WriteResult::InputEmpty {
            break;
        }
        data = &data[nin..];
    }
    let (result, nout) = writer.finish(&mut output);
    debug_assert_eq!(result, csv_core::WriteResult::InputEmpty);
    wtr.write_all(&output[..nout])?;
    Ok(())
}
