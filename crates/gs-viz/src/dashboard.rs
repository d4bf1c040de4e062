//! Dashboard state and the pure render pass.
//!
//! State mutation (parameter choices) happens in the caller; this module
//! is the computation + presentation layer: one `render(table, state)`
//! call produces the complete view artifact for that state, with no
//! hidden caching and no side effects.

use gs_core::{Error, Result};
use gs_data::{stats, MemberTable, TableSchema};
use serde::Serialize;

use crate::charts::{count_artifact, histogram_artifact, CountChartArtifact, HistogramArtifact};
use crate::distributions::{
    binomial_section, poisson_section, BinomialSectionArtifact, PoissonSectionArtifact,
};
use crate::meta::ArtifactMeta;
use crate::metrics::{metrics_artifact, MetricsArtifact};

/// Largest sample size the binomial query accepts.
pub const MAX_SAMPLE_SIZE: u64 = 50;
/// Largest threshold the Poisson query accepts.
pub const MAX_POISSON_THRESHOLD: u64 = 20;

/// User-chosen parameters for one render pass.
///
/// Defaults match the reference dashboard: a sample of 10 with binomial
/// threshold 5, Poisson threshold 8 over a display support of `[0, 20]`,
/// 7 visit bins and 6 class bins.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardState {
    /// Column names and sentinels of the input table.
    pub schema: TableSchema,
    /// Binomial trials `n`, in `[1, MAX_SAMPLE_SIZE]`.
    pub sample_size: u64,
    /// Binomial tail threshold `k`, in `[1, MAX_SAMPLE_SIZE]`.
    pub trainer_threshold: u64,
    /// Poisson tail threshold, in `[0, MAX_POISSON_THRESHOLD]`.
    pub visits_threshold: u64,
    /// Upper limit of the displayed Poisson support.
    pub poisson_support_bound: u64,
    /// Bin count for the visits-per-week histogram.
    pub visits_bins: usize,
    /// Bin count for the classes-per-month histogram.
    pub classes_bins: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            schema: TableSchema::default(),
            sample_size: 10,
            trainer_threshold: 5,
            visits_threshold: 8,
            poisson_support_bound: 20,
            visits_bins: 7,
            classes_bins: 6,
        }
    }
}

impl DashboardState {
    fn validate(&self) -> Result<()> {
        if self.sample_size == 0 || self.sample_size > MAX_SAMPLE_SIZE {
            return Err(Error::Validation(format!(
                "sample size must be in [1, {}], got {}",
                MAX_SAMPLE_SIZE, self.sample_size
            )));
        }
        if self.trainer_threshold == 0 || self.trainer_threshold > MAX_SAMPLE_SIZE {
            return Err(Error::Validation(format!(
                "trainer threshold must be in [1, {}], got {}",
                MAX_SAMPLE_SIZE, self.trainer_threshold
            )));
        }
        if self.visits_threshold > MAX_POISSON_THRESHOLD {
            return Err(Error::Validation(format!(
                "visits threshold must be in [0, {}], got {}",
                MAX_POISSON_THRESHOLD, self.visits_threshold
            )));
        }
        Ok(())
    }
}

/// The complete view for one state: every panel the dashboard shows.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Provenance block.
    pub meta: ArtifactMeta,
    /// Headline metric cards.
    pub metrics: MetricsArtifact,
    /// Membership plan counts.
    pub membership_counts: CountChartArtifact,
    /// Training goal counts.
    pub goal_counts: CountChartArtifact,
    /// Visits-per-week histogram.
    pub visits_histogram: HistogramArtifact,
    /// Classes-per-month histogram.
    pub classes_histogram: HistogramArtifact,
    /// Binomial section; absent when the threshold exceeds the sample size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binomial: Option<BinomialSectionArtifact>,
    /// User-facing message shown instead of the binomial section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binomial_error: Option<String>,
    /// Poisson section.
    pub poisson: PoissonSectionArtifact,
}

/// Render the dashboard for one state.
///
/// A threshold exceeding the sample size suppresses only the binomial
/// section (carrying the message instead); every other panel still
/// renders, so one bad slider does not blank the page.
pub fn render(table: &MemberTable, state: &DashboardState) -> Result<DashboardArtifact> {
    state.validate()?;
    let schema = &state.schema;

    let metrics = metrics_artifact(table, schema)?;
    let membership_counts = count_artifact(table, &schema.membership_col)?;
    let goal_counts = count_artifact(table, &schema.goal_col)?;
    let visits_histogram = histogram_artifact(table, &schema.visits_col, state.visits_bins)?;
    let classes_histogram = histogram_artifact(table, &schema.classes_col, state.classes_bins)?;

    let (binomial, binomial_error) = if state.trainer_threshold > state.sample_size {
        (
            None,
            Some(format!(
                "threshold k must not exceed the sample size n (k={}, n={})",
                state.trainer_threshold, state.sample_size
            )),
        )
    } else {
        let p = stats::empirical_proportion(table, &schema.trainer_col, &schema.trainer_yes_value)?;
        (Some(binomial_section(state.sample_size, p, state.trainer_threshold)?), None)
    };

    let rate = stats::empirical_mean(table, &schema.visits_col)?;
    let poisson = poisson_section(rate, state.visits_threshold, state.poisson_support_bound)?;

    Ok(DashboardArtifact {
        schema_version: "gymstat_dashboard_v0".to_string(),
        meta: ArtifactMeta::now()?,
        metrics,
        membership_counts,
        goal_counts,
        visits_histogram,
        classes_histogram,
        binomial,
        binomial_error,
        poisson,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    fn ten_member_csv() -> String {
        let mut csv = String::from(
            "Age,BMI,Status,MembershipType,Goal,VisitsPerWeek,ClassesPerMonth,PersonalTrainer\n",
        );
        let visits = [2, 3, 3, 4, 5, 2, 3, 3, 4, 5];
        for (i, v) in visits.iter().enumerate() {
            let pt = if i < 4 { "Sim" } else { "Nao" };
            let status = if i % 2 == 0 { "Ativo" } else { "Inativo" };
            let plan = if i < 6 { "Mensal" } else { "Anual" };
            csv.push_str(&format!(
                "{},{},{},{},Hipertrofia,{},{},{}\n",
                25 + i,
                21.5 + i as f64,
                status,
                plan,
                v,
                4 + i % 3,
                pt
            ));
        }
        csv
    }

    fn ten_member_table() -> MemberTable {
        MemberTable::from_reader(Cursor::new(ten_member_csv()), b',').unwrap()
    }

    #[test]
    fn test_render_full_dashboard() {
        let table = ten_member_table();
        let view = render(&table, &DashboardState::default()).unwrap();

        assert_eq!(view.metrics.total_members, 10);
        assert_eq!(view.metrics.active_members, 5);
        assert_eq!(view.membership_counts.entries[0].label, "Mensal");
        assert_eq!(view.goal_counts.entries.len(), 1);
        assert_eq!(view.visits_histogram.counts.iter().sum::<u64>(), 10);

        // p = 0.4 from 4/10 trainers; defaults n=10, k=5.
        let b = view.binomial.expect("binomial section should render");
        assert!(view.binomial_error.is_none());
        assert_relative_eq!(b.success_rate, 0.4, epsilon = 1e-12);
        assert_relative_eq!(b.tail_probability, 0.3668967, epsilon = 1e-6);

        // Visits mean 3.4.
        assert_relative_eq!(view.poisson.rate, 3.4, epsilon = 1e-12);
        assert_eq!(view.poisson.outcomes.len(), 21);
    }

    #[test]
    fn test_render_suppresses_binomial_on_bad_threshold() {
        let table = ten_member_table();
        let state =
            DashboardState { sample_size: 5, trainer_threshold: 7, ..DashboardState::default() };
        let view = render(&table, &state).unwrap();

        assert!(view.binomial.is_none());
        let msg = view.binomial_error.expect("error message should surface");
        assert!(msg.contains("k=7"));
        assert!(msg.contains("n=5"));
        // The rest of the dashboard still rendered.
        assert_eq!(view.metrics.total_members, 10);
        assert_eq!(view.poisson.outcomes.len(), 21);
    }

    #[test]
    fn test_render_rejects_out_of_range_sliders() {
        let table = ten_member_table();
        for state in [
            DashboardState { sample_size: 0, ..DashboardState::default() },
            DashboardState { sample_size: 51, ..DashboardState::default() },
            DashboardState { trainer_threshold: 0, ..DashboardState::default() },
            DashboardState { visits_threshold: 21, ..DashboardState::default() },
        ] {
            assert!(render(&table, &state).is_err(), "state should be rejected: {:?}", state);
        }
    }

    #[test]
    fn test_poisson_tail_with_visits_threshold_five() {
        let table = ten_member_table();
        let state = DashboardState { visits_threshold: 5, ..DashboardState::default() };
        let view = render(&table, &state).unwrap();
        assert_relative_eq!(view.poisson.tail_probability, 0.2558184, epsilon = 1e-6);
    }
}
