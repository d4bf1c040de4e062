//! Delimited member tables with per-column type inference.

use gs_core::{Error, Result};
use std::io::Read;
use std::path::Path;

/// A fully-populated, typed column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Every cell parsed as `f64` (true/false literals coerce to 1/0).
    Numeric(Vec<f64>),
    /// Every cell was a true/false/0/1 literal, with at least one
    /// alphabetic literal present.
    Boolean(Vec<bool>),
    /// Anything else: cells kept as raw strings.
    Categorical(Vec<String>),
}

impl Column {
    /// Number of cells in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Boolean(v) => v.len(),
            Column::Categorical(v) => v.len(),
        }
    }

    /// Whether the column holds no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered, column-typed table of member records.
#[derive(Debug, Clone)]
pub struct MemberTable {
    headers: Vec<String>,
    columns: Vec<Column>,
    n_rows: usize,
}

fn is_bool_literal(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
}

fn infer_column(cells: &[String]) -> Column {
    let all_bool = cells.iter().all(|s| is_bool_literal(s) || s == "0" || s == "1");
    if all_bool && cells.iter().any(|s| is_bool_literal(s)) {
        return Column::Boolean(
            cells.iter().map(|s| s.eq_ignore_ascii_case("true") || s == "1").collect(),
        );
    }

    let all_numeric = cells.iter().all(|s| s.parse::<f64>().is_ok() || is_bool_literal(s));
    if all_numeric {
        return Column::Numeric(
            cells
                .iter()
                .map(|s| {
                    if s.eq_ignore_ascii_case("true") {
                        1.0
                    } else if s.eq_ignore_ascii_case("false") {
                        0.0
                    } else {
                        // Parse already succeeded during inference.
                        s.parse::<f64>().unwrap_or(f64::NAN)
                    }
                })
                .collect(),
        );
    }

    Column::Categorical(cells.to_vec())
}

impl MemberTable {
    /// Load a table from a delimited file with a header row.
    ///
    /// The delimiter is chosen from the extension: tab for `.tsv`,
    /// comma otherwise.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_lowercase();
        let delimiter = if ext == "tsv" { b'\t' } else { b',' };
        let file = std::fs::File::open(path).map_err(|e| {
            Error::Validation(format!("cannot open input table {}: {}", path.display(), e))
        })?;
        Self::from_reader(file, delimiter)
    }

    /// Load a table from any reader.
    ///
    /// Header names are trimmed of surrounding whitespace; every record
    /// must populate every field, so an empty cell is a validation error.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut rdr =
            csv::ReaderBuilder::new().delimiter(delimiter).has_headers(true).from_reader(reader);

        // Strip a leading BOM so exported files re-import cleanly.
        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        if headers.is_empty() {
            return Err(Error::Validation("input table has no columns".to_string()));
        }

        let n_cols = headers.len();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); n_cols];

        for (row_idx, result) in rdr.records().enumerate() {
            let record = result?;
            if record.len() != n_cols {
                return Err(Error::Validation(format!(
                    "row {} has {} fields, expected {}",
                    row_idx + 1,
                    record.len(),
                    n_cols
                )));
            }
            for (j, field) in record.iter().enumerate() {
                let field = field.trim();
                if field.is_empty() {
                    return Err(Error::Validation(format!(
                        "row {} has an empty '{}' field",
                        row_idx + 1,
                        headers[j]
                    )));
                }
                cells[j].push(field.to_string());
            }
        }

        if cells[0].is_empty() {
            return Err(Error::Validation("input table contains no data rows".to_string()));
        }

        let n_rows = cells[0].len();
        let columns: Vec<Column> = cells.iter().map(|c| infer_column(c)).collect();

        Ok(Self { headers, columns, n_rows })
    }

    /// Number of records.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Column names, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| Error::Validation(format!("column '{}' not found", name)))
    }

    /// Extract a numeric column, coercing booleans to 0/1.
    pub fn numeric(&self, name: &str) -> Result<Vec<f64>> {
        match self.column(name)? {
            Column::Numeric(v) => Ok(v.clone()),
            Column::Boolean(v) => Ok(v.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect()),
            Column::Categorical(_) => Err(Error::Validation(format!(
                "column '{}' is categorical, expected numeric",
                name
            ))),
        }
    }

    /// Extract a categorical column.
    pub fn categorical(&self, name: &str) -> Result<&[String]> {
        match self.column(name)? {
            Column::Categorical(v) => Ok(v),
            _ => Err(Error::Validation(format!(
                "column '{}' is not categorical",
                name
            ))),
        }
    }

    /// Render one record's cell as a string, for re-encoding.
    pub fn cell_to_string(&self, col_idx: usize, row_idx: usize) -> String {
        match &self.columns[col_idx] {
            Column::Numeric(v) => {
                let x = v[row_idx];
                if x.fract() == 0.0 && x.abs() < 1e15 {
                    format!("{}", x as i64)
                } else {
                    format!("{}", x)
                }
            }
            Column::Boolean(v) => {
                if v[row_idx] { "true".to_string() } else { "false".to_string() }
            }
            Column::Categorical(v) => v[row_idx].clone(),
        }
    }
}
