//! Session-scoped table access.
//!
//! The table is read once per session and handed to computations as an
//! injected dependency, instead of an ambient process-wide cache.

use gs_core::{Error, Result};
use std::path::PathBuf;

use crate::table::MemberTable;

/// Source of the member table for one session.
pub trait TableProvider {
    /// The loaded table; implementations may cache across calls.
    fn table(&mut self) -> Result<&MemberTable>;
}

/// Loads a delimited file lazily on first access and caches it for the
/// lifetime of the provider.
pub struct CsvTableProvider {
    path: PathBuf,
    cached: Option<MemberTable>,
}

impl CsvTableProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), cached: None }
    }
}

impl TableProvider for CsvTableProvider {
    fn table(&mut self) -> Result<&MemberTable> {
        if self.cached.is_none() {
            let table = MemberTable::from_path(&self.path)?;
            tracing::info!(
                path = %self.path.display(),
                rows = table.n_rows(),
                columns = table.headers().len(),
                "table loaded"
            );
            self.cached = Some(table);
        }
        self.cached
            .as_ref()
            .ok_or_else(|| Error::Computation("table cache empty after load".to_string()))
    }
}
