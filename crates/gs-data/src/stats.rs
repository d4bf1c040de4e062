//! Empirical statistics over member tables.
//!
//! These are the dataset-to-parameter step of the distribution analyzer
//! (proportion, mean) plus the aggregations the chart artifacts render
//! (category counts, equal-width histograms).

use gs_core::{Error, Result};
use serde::Serialize;

use crate::table::MemberTable;

/// One distinct categorical value with its record count.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Equal-width histogram of a numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    /// `counts.len() + 1` edges; bin `i` spans `[edges[i], edges[i+1])`,
    /// with the last bin closed on the right.
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

/// Fraction of records whose categorical field equals `match_value`.
pub fn empirical_proportion(
    table: &MemberTable,
    column: &str,
    match_value: &str,
) -> Result<f64> {
    let cells = table.categorical(column)?;
    if cells.is_empty() {
        return Err(Error::Validation(format!("column '{}' has no records", column)));
    }
    let matches = cells.iter().filter(|c| c.as_str() == match_value).count();
    Ok(matches as f64 / cells.len() as f64)
}

/// Arithmetic mean of a numeric column.
pub fn empirical_mean(table: &MemberTable, column: &str) -> Result<f64> {
    let values = table.numeric(column)?;
    if values.is_empty() {
        return Err(Error::Validation(format!("column '{}' has no records", column)));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(Error::Validation(format!(
            "column '{}' holds a non-finite value {}",
            column, bad
        )));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Distinct values of a categorical column with counts, ordered by
/// descending count (ties broken by label for stable output).
pub fn category_counts(table: &MemberTable, column: &str) -> Result<Vec<CategoryCount>> {
    let cells = table.categorical(column)?;
    let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for c in cells {
        *counts.entry(c.as_str()).or_insert(0) += 1;
    }
    let mut out: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount { label: label.to_string(), count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    Ok(out)
}

/// Equal-width histogram of a numeric column with `n_bins` bins.
pub fn histogram(table: &MemberTable, column: &str, n_bins: usize) -> Result<Histogram> {
    if n_bins == 0 {
        return Err(Error::Validation("histogram needs at least one bin".to_string()));
    }
    let values = table.numeric(column)?;
    if values.is_empty() {
        return Err(Error::Validation(format!("column '{}' has no records", column)));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::Validation(format!(
            "column '{}' holds non-finite values",
            column
        )));
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Degenerate single-value column: one bin of unit width.
    let (min, max, n_bins) = if min == max { (min, min + 1.0, 1) } else { (min, max, n_bins) };

    let width = (max - min) / n_bins as f64;
    let edges: Vec<f64> = (0..=n_bins).map(|i| min + width * i as f64).collect();
    let mut counts = vec![0u64; n_bins];
    for &v in &values {
        let idx = (((v - min) / width) as usize).min(n_bins - 1);
        counts[idx] += 1;
    }

    Ok(Histogram { edges, counts })
}
