//! Binomial distribution utilities.

use crate::math::ln_choose;
use gs_core::{Error, Result};
use statrs::function::beta::beta_reg;

fn validate_p(p: f64) -> Result<()> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(Error::Validation(format!("p must be finite and in [0,1], got {}", p)));
    }
    Ok(())
}

/// Log-PMF of a Binomial distribution `Binom(n, p)` at count `k`.
pub fn logpmf(k: u64, n: u64, p: f64) -> Result<f64> {
    validate_p(p)?;
    if k > n {
        return Err(Error::Validation(format!("k must be <= n, got k={} n={}", k, n)));
    }

    if p == 0.0 {
        return Ok(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
    }
    if p == 1.0 {
        return Ok(if k == n { 0.0 } else { f64::NEG_INFINITY });
    }
    let kf = k as f64;
    let nf = n as f64;
    Ok(ln_choose(n, k) + kf * p.ln() + (nf - kf) * (1.0 - p).ln())
}

/// PMF of a Binomial distribution at count `k`.
pub fn pmf(k: u64, n: u64, p: f64) -> Result<f64> {
    Ok(logpmf(k, n, p)?.exp())
}

/// PMF over the full support `[0, n]`.
///
/// The returned masses sum to 1 within floating-point tolerance.
pub fn masses(n: u64, p: f64) -> Result<Vec<f64>> {
    (0..=n).map(|k| pmf(k, n, p)).collect()
}

/// CDF `P[X <= k]` of `Binom(n, p)`.
///
/// Computed through the regularized incomplete beta function,
/// `F(k; n, p) = I_{1-p}(n-k, k+1)`, not by summing PMF terms.
pub fn cdf(k: u64, n: u64, p: f64) -> Result<f64> {
    validate_p(p)?;
    if k >= n {
        return Ok(1.0);
    }
    if p == 0.0 {
        return Ok(1.0);
    }
    if p == 1.0 {
        return Ok(0.0);
    }
    Ok(beta_reg((n - k) as f64, (k + 1) as f64, 1.0 - p))
}

/// Upper-tail probability `P[X >= k] = 1 - P[X <= k-1]`.
///
/// `k` must satisfy `k <= n`; violating the bound is a validation error
/// (the threshold the user asked about lies outside the support).
pub fn tail(k: u64, n: u64, p: f64) -> Result<f64> {
    if k > n {
        return Err(Error::Validation(format!(
            "threshold k must not exceed the sample size n, got k={} n={}",
            k, n
        )));
    }
    if k == 0 {
        validate_p(p)?;
        return Ok(1.0);
    }
    Ok((1.0 - cdf(k - 1, n, p)?).clamp(0.0, 1.0))
}
