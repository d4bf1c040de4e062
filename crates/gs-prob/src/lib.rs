//! Probability building blocks for gymstat.
//!
//! This crate hosts the discrete-distribution math used by the dashboard:
//! - binomial PMF / CDF / upper-tail probability
//! - Poisson PMF / CDF / upper-tail probability
//! - small log-space combinatorial helpers
//!
//! Tail probabilities go through the CDF complement rather than summing
//! tail terms, so large supports do not accumulate cancellation error.

pub mod binomial;
pub mod math;
pub mod poisson;
