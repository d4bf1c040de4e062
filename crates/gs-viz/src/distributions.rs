//! Distribution section artifacts — PMF bars plus upper-tail probability.
//!
//! Each section carries the fitted parameter, the threshold, the mass at
//! every support point, a parallel `in_tail` flag per outcome (the
//! frontend highlights the tail region), and `P[X >= k]`.

use gs_core::Result;
use gs_prob::{binomial, poisson};
use serde::Serialize;

use crate::meta::ArtifactMeta;

/// Binomial query result over the support `[0, n]`.
#[derive(Debug, Clone, Serialize)]
pub struct BinomialSectionArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Provenance block.
    pub meta: ArtifactMeta,
    /// Number of trials (sampled members).
    pub n: u64,
    /// Tail threshold `k`.
    pub threshold: u64,
    /// Empirical success probability fitted from the table.
    pub success_rate: f64,
    /// Support points `0..=n`.
    pub outcomes: Vec<u64>,
    /// `P[X = i]` per support point; sums to 1 within tolerance.
    pub masses: Vec<f64>,
    /// Whether each support point lies in the highlighted tail (`i >= k`).
    pub in_tail: Vec<bool>,
    /// `P[X >= k]`, via the CDF complement.
    pub tail_probability: f64,
}

/// Poisson query result over the bounded display support.
#[derive(Debug, Clone, Serialize)]
pub struct PoissonSectionArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Provenance block.
    pub meta: ArtifactMeta,
    /// Empirical rate fitted from the table.
    pub rate: f64,
    /// Tail threshold `k`; may exceed the display support.
    pub threshold: u64,
    /// Upper limit of the displayed support (inclusive).
    pub support_bound: u64,
    /// Support points `0..=support_bound`.
    pub outcomes: Vec<u64>,
    /// `P[X = i]` per displayed support point; partial sums stay below 1.
    pub masses: Vec<f64>,
    /// Whether each displayed point lies in the tail (`i >= k`).
    pub in_tail: Vec<bool>,
    /// `P[X >= k]`, via the CDF complement.
    pub tail_probability: f64,
}

/// Build the binomial section for `Binom(n, p)` with threshold `k`.
///
/// `k > n` is a validation error; callers surface it to the user instead
/// of rendering the section.
pub fn binomial_section(n: u64, p: f64, k: u64) -> Result<BinomialSectionArtifact> {
    let tail_probability = binomial::tail(k, n, p)?;
    let masses = binomial::masses(n, p)?;
    let outcomes: Vec<u64> = (0..=n).collect();
    let in_tail: Vec<bool> = outcomes.iter().map(|&i| i >= k).collect();

    Ok(BinomialSectionArtifact {
        schema_version: "gymstat_binomial_v0".to_string(),
        meta: ArtifactMeta::now()?,
        n,
        threshold: k,
        success_rate: p,
        outcomes,
        masses,
        in_tail,
        tail_probability,
    })
}

/// Build the Poisson section for `Pois(rate)` with threshold `k` over a
/// fixed display support `[0, support_bound]`.
pub fn poisson_section(
    rate: f64,
    k: u64,
    support_bound: u64,
) -> Result<PoissonSectionArtifact> {
    let tail_probability = poisson::tail(k, rate)?;
    let masses = poisson::masses(rate, support_bound)?;
    let outcomes: Vec<u64> = (0..=support_bound).collect();
    let in_tail: Vec<bool> = outcomes.iter().map(|&i| i >= k).collect();

    Ok(PoissonSectionArtifact {
        schema_version: "gymstat_poisson_v0".to_string(),
        meta: ArtifactMeta::now()?,
        rate,
        threshold: k,
        support_bound,
        outcomes,
        masses,
        in_tail,
        tail_probability,
    })
}
