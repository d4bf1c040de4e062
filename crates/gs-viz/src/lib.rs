//! # gs-viz
//!
//! Visualization data artifacts for gymstat.
//!
//! This crate is intentionally dependency-light and focuses on emitting
//! plot-friendly JSON structures (parallel arrays instead of nested
//! objects). A plotting frontend consumes the artifacts; no widgets or
//! colors live here.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Artifact metadata shared by every emitted structure.
pub mod meta;

/// Metric card artifacts (mean age, mean BMI, member counts).
pub mod metrics;

/// Categorical count and numeric histogram artifacts.
pub mod charts;

/// Binomial and Poisson distribution section artifacts.
pub mod distributions;

/// Dashboard state and the pure `render(state) -> view` pass.
pub mod dashboard;

pub use dashboard::{render, DashboardArtifact, DashboardState};
pub use distributions::{BinomialSectionArtifact, PoissonSectionArtifact};
pub use meta::ArtifactMeta;
