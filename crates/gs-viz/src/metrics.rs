//! Metric card artifact — the dashboard's headline numbers.

use gs_core::Result;
use gs_data::{stats, MemberTable, TableSchema};
use serde::Serialize;

use crate::meta::ArtifactMeta;

/// Headline metrics computed over the full table.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Provenance block.
    pub meta: ArtifactMeta,
    /// Mean of the age column.
    pub mean_age: f64,
    /// Mean of the body-mass-index column.
    pub mean_bmi: f64,
    /// Total record count.
    pub total_members: usize,
    /// Records whose status equals the active sentinel.
    pub active_members: usize,
}

/// Build the metric cards for a member table.
pub fn metrics_artifact(table: &MemberTable, schema: &TableSchema) -> Result<MetricsArtifact> {
    let mean_age = stats::empirical_mean(table, &schema.age_col)?;
    let mean_bmi = stats::empirical_mean(table, &schema.bmi_col)?;
    let active_members = table
        .categorical(&schema.status_col)?
        .iter()
        .filter(|s| s.as_str() == schema.active_value)
        .count();

    Ok(MetricsArtifact {
        schema_version: "gymstat_metrics_v0".to_string(),
        meta: ArtifactMeta::now()?,
        mean_age,
        mean_bmi,
        total_members: table.n_rows(),
        active_members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    #[test]
    fn test_metrics_over_small_table() {
        let csv = "Age,BMI,Status\n30,22.0,Ativo\n40,26.0,Inativo\n50,24.0,Ativo\n";
        let table = MemberTable::from_reader(Cursor::new(csv), b',').unwrap();
        let m = metrics_artifact(&table, &TableSchema::default()).unwrap();
        assert_relative_eq!(m.mean_age, 40.0, epsilon = 1e-12);
        assert_relative_eq!(m.mean_bmi, 24.0, epsilon = 1e-12);
        assert_eq!(m.total_members, 3);
        assert_eq!(m.active_members, 2);
        assert_eq!(m.schema_version, "gymstat_metrics_v0");
    }
}
