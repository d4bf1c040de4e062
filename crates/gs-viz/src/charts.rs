//! Categorical count and numeric histogram artifacts.

use gs_core::Result;
use gs_data::{stats, MemberTable};
use serde::Serialize;

use crate::meta::ArtifactMeta;

/// Count chart over the distinct values of one categorical column,
/// ordered by descending count.
#[derive(Debug, Clone, Serialize)]
pub struct CountChartArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Provenance block.
    pub meta: ArtifactMeta,
    /// Source column name.
    pub column: String,
    /// One entry per distinct value.
    pub entries: Vec<CountEntry>,
}

/// One bar of a count chart.
#[derive(Debug, Clone, Serialize)]
pub struct CountEntry {
    /// Distinct categorical value.
    pub label: String,
    /// Record count for the value.
    pub count: usize,
    /// Count as a fraction of all records.
    pub fraction: f64,
}

/// Equal-width histogram over one numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Provenance block.
    pub meta: ArtifactMeta,
    /// Source column name.
    pub column: String,
    /// `counts.len() + 1` bin edges.
    pub bin_edges: Vec<f64>,
    /// Record count per bin.
    pub counts: Vec<u64>,
}

/// Build a count chart artifact for a categorical column.
pub fn count_artifact(table: &MemberTable, column: &str) -> Result<CountChartArtifact> {
    let counts = stats::category_counts(table, column)?;
    let total: usize = counts.iter().map(|c| c.count).sum();
    let entries = counts
        .into_iter()
        .map(|c| CountEntry {
            fraction: if total > 0 { c.count as f64 / total as f64 } else { 0.0 },
            label: c.label,
            count: c.count,
        })
        .collect();

    Ok(CountChartArtifact {
        schema_version: "gymstat_counts_v0".to_string(),
        meta: ArtifactMeta::now()?,
        column: column.to_string(),
        entries,
    })
}

/// Build a histogram artifact for a numeric column.
pub fn histogram_artifact(
    table: &MemberTable,
    column: &str,
    n_bins: usize,
) -> Result<HistogramArtifact> {
    let h = stats::histogram(table, column, n_bins)?;
    Ok(HistogramArtifact {
        schema_version: "gymstat_histogram_v0".to_string(),
        meta: ArtifactMeta::now()?,
        column: column.to_string(),
        bin_edges: h.edges,
        counts: h.counts,
    })
}
