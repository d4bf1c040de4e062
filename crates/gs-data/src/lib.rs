//! Tabular member data for gymstat.
//!
//! Loads a delimited member table with per-column type inference, derives
//! the empirical parameters the distribution analyzer consumes (proportion,
//! mean), produces chart-ready aggregations (category counts, histograms),
//! and re-encodes the table for export.

pub mod export;
pub mod provider;
pub mod schema;
pub mod stats;
pub mod table;

pub use provider::{CsvTableProvider, TableProvider};
pub use schema::TableSchema;
pub use table::{Column, MemberTable};
