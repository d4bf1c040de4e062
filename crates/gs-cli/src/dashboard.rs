use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use gs_data::provider::{CsvTableProvider, TableProvider};
use gs_data::{export, stats, TableSchema};
use gs_viz::charts::{count_artifact, histogram_artifact};
use gs_viz::dashboard::{render, DashboardState};
use gs_viz::distributions::{binomial_section, poisson_section};
use gs_viz::metrics::metrics_artifact;

fn provider_for(input: &Path) -> CsvTableProvider {
    CsvTableProvider::new(input.to_path_buf())
}

// ---------------------------------------------------------------------------
// summary
// ---------------------------------------------------------------------------

pub fn cmd_summary(input: &Path, schema: &TableSchema, output: Option<&PathBuf>) -> Result<()> {
    let mut provider = provider_for(input);
    let table = provider
        .table()
        .with_context(|| format!("failed to load member table {}", input.display()))?;

    let artifact = metrics_artifact(table, schema)?;
    crate::write_json(output, serde_json::to_value(&artifact)?)?;

    eprintln!(
        "Summary: {} members ({} active), mean age {:.1}, mean BMI {:.1}",
        artifact.total_members, artifact.active_members, artifact.mean_age, artifact.mean_bmi
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// charts
// ---------------------------------------------------------------------------

pub fn cmd_charts(
    input: &Path,
    schema: &TableSchema,
    visits_bins: usize,
    classes_bins: usize,
    output: Option<&PathBuf>,
) -> Result<()> {
    let mut provider = provider_for(input);
    let table = provider
        .table()
        .with_context(|| format!("failed to load member table {}", input.display()))?;

    let membership = count_artifact(table, &schema.membership_col)?;
    let goals = count_artifact(table, &schema.goal_col)?;
    let visits = histogram_artifact(table, &schema.visits_col, visits_bins)?;
    let classes = histogram_artifact(table, &schema.classes_col, classes_bins)?;

    let output_json = serde_json::json!({
        "membership_counts": membership,
        "goal_counts": goals,
        "visits_histogram": visits,
        "classes_histogram": classes,
    });
    crate::write_json(output, output_json)?;

    eprintln!(
        "Charts: {} plans, {} goals, {} visit bins, {} class bins",
        membership.entries.len(),
        goals.entries.len(),
        visits.counts.len(),
        classes.counts.len()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// binomial
// ---------------------------------------------------------------------------

pub fn cmd_binomial(
    input: &Path,
    schema: &TableSchema,
    sample_size: u64,
    threshold: u64,
    output: Option<&PathBuf>,
) -> Result<()> {
    if sample_size == 0 || sample_size > gs_viz::dashboard::MAX_SAMPLE_SIZE {
        anyhow::bail!(
            "sample size must be in [1, {}], got {}",
            gs_viz::dashboard::MAX_SAMPLE_SIZE,
            sample_size
        );
    }
    if threshold > sample_size {
        anyhow::bail!(
            "threshold k must not exceed the sample size n (k={}, n={})",
            threshold,
            sample_size
        );
    }

    let mut provider = provider_for(input);
    let table = provider
        .table()
        .with_context(|| format!("failed to load member table {}", input.display()))?;

    let p = stats::empirical_proportion(table, &schema.trainer_col, &schema.trainer_yes_value)?;
    let artifact = binomial_section(sample_size, p, threshold)?;
    crate::write_json(output, serde_json::to_value(&artifact)?)?;

    eprintln!("Observed trainer rate: {:.1}%", p * 100.0);
    eprintln!(
        "P[X >= {}] over {} sampled members: {:.2}%",
        threshold,
        sample_size,
        artifact.tail_probability * 100.0
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// poisson
// ---------------------------------------------------------------------------

pub fn cmd_poisson(
    input: &Path,
    schema: &TableSchema,
    threshold: u64,
    support_bound: u64,
    output: Option<&PathBuf>,
) -> Result<()> {
    if threshold > gs_viz::dashboard::MAX_POISSON_THRESHOLD {
        anyhow::bail!(
            "threshold must be in [0, {}], got {}",
            gs_viz::dashboard::MAX_POISSON_THRESHOLD,
            threshold
        );
    }

    let mut provider = provider_for(input);
    let table = provider
        .table()
        .with_context(|| format!("failed to load member table {}", input.display()))?;

    let rate = stats::empirical_mean(table, &schema.visits_col)?;
    let artifact = poisson_section(rate, threshold, support_bound)?;
    crate::write_json(output, serde_json::to_value(&artifact)?)?;

    eprintln!("Mean visits per week: {:.2}", rate);
    eprintln!("P[X >= {}]: {:.2}%", threshold, artifact.tail_probability * 100.0);
    Ok(())
}

// ---------------------------------------------------------------------------
// dashboard
// ---------------------------------------------------------------------------

pub fn cmd_dashboard(
    input: &Path,
    schema: TableSchema,
    sample_size: u64,
    threshold: u64,
    poisson_k: u64,
    output: Option<&PathBuf>,
) -> Result<()> {
    let mut provider = provider_for(input);
    let table = provider
        .table()
        .with_context(|| format!("failed to load member table {}", input.display()))?;

    let state = DashboardState {
        schema,
        sample_size,
        trainer_threshold: threshold,
        visits_threshold: poisson_k,
        ..DashboardState::default()
    };
    let view = render(table, &state)?;
    crate::write_json(output, serde_json::to_value(&view)?)?;

    eprintln!(
        "Dashboard: {} members ({} active)",
        view.metrics.total_members, view.metrics.active_members
    );
    match (&view.binomial, &view.binomial_error) {
        (Some(b), _) => {
            eprintln!("Binomial: P[X >= {}] = {:.2}%", b.threshold, b.tail_probability * 100.0)
        }
        (None, Some(msg)) => eprintln!("Binomial: skipped ({})", msg),
        (None, None) => {}
    }
    eprintln!(
        "Poisson: P[X >= {}] = {:.2}%",
        view.poisson.threshold,
        view.poisson.tail_probability * 100.0
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

pub fn cmd_export(input: &Path, out_dir: &Path) -> Result<()> {
    let mut provider = provider_for(input);
    let table = provider
        .table()
        .with_context(|| format!("failed to load member table {}", input.display()))?;

    let path = export::export_csv(table, out_dir)?;
    eprintln!("Wrote {} ({} rows)", path.display(), table.n_rows());
    Ok(())
}
