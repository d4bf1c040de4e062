//! Table re-encoding for download.

use gs_core::{Error, Result};
use std::path::{Path, PathBuf};

use crate::table::MemberTable;

/// Fixed name of the exported file.
pub const EXPORT_FILENAME: &str = "gym_dataset_export.csv";

/// Re-encode the full table as UTF-8 CSV prefixed with a byte order
/// marker, written to `dir/EXPORT_FILENAME`. Returns the written path.
///
/// The BOM keeps spreadsheet tools from misreading accented categorical
/// values in the exported file.
pub fn export_csv(table: &MemberTable, dir: &Path) -> Result<PathBuf> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(table.headers())?;
    for row in 0..table.n_rows() {
        let record: Vec<String> =
            (0..table.headers().len()).map(|col| table.cell_to_string(col, row)).collect();
        wtr.write_record(&record)?;
    }
    let body = wtr
        .into_inner()
        .map_err(|e| Error::Computation(format!("CSV buffer flush failed: {}", e)))?;

    let mut bytes = Vec::with_capacity(body.len() + 3);
    bytes.extend_from_slice(&[0xEF, 0xBB, 0xBF]);
    bytes.extend_from_slice(&body);

    std::fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILENAME);
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), rows = table.n_rows(), "table exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn tmp_dir() -> PathBuf {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        let mut p = std::env::temp_dir();
        p.push(format!("gymstat_export_{}_{}", std::process::id(), nanos));
        p
    }

    #[test]
    fn test_export_has_bom_and_full_table() {
        let csv = "Age,Status\n34,Ativo\n29,Inativo\n";
        let table = MemberTable::from_reader(Cursor::new(csv), b',').unwrap();
        let dir = tmp_dir();

        let path = export_csv(&table, &dir).unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), EXPORT_FILENAME);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(text, "Age,Status\n34,Ativo\n29,Inativo\n");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
