//! Poisson distribution utilities.

use crate::math::ln_factorial;
use gs_core::{Error, Result};
use statrs::function::gamma::gamma_ur;

fn validate_lambda(lambda: f64) -> Result<()> {
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(Error::Validation(format!(
            "lambda must be finite and >= 0, got {}",
            lambda
        )));
    }
    Ok(())
}

/// Log-PMF of a Poisson distribution `Pois(lambda)` at count `k`.
pub fn logpmf(k: u64, lambda: f64) -> Result<f64> {
    validate_lambda(lambda)?;
    if lambda == 0.0 {
        // Point mass at zero.
        return Ok(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
    }
    let kf = k as f64;
    Ok(kf * lambda.ln() - lambda - ln_factorial(k))
}

/// PMF of a Poisson distribution at count `k`.
pub fn pmf(k: u64, lambda: f64) -> Result<f64> {
    Ok(logpmf(k, lambda)?.exp())
}

/// PMF over the bounded support `[0, support_bound]`.
///
/// The Poisson support is unbounded, so the returned masses sum to
/// strictly less than 1 for any finite bound (exactly 1 only for
/// `lambda = 0`).
pub fn masses(lambda: f64, support_bound: u64) -> Result<Vec<f64>> {
    (0..=support_bound).map(|k| pmf(k, lambda)).collect()
}

/// CDF `P[X <= k]` of `Pois(lambda)`.
///
/// Computed through the regularized upper incomplete gamma function,
/// `F(k; lambda) = Q(k+1, lambda)`, not by summing PMF terms.
pub fn cdf(k: u64, lambda: f64) -> Result<f64> {
    validate_lambda(lambda)?;
    if lambda == 0.0 {
        return Ok(1.0);
    }
    Ok(gamma_ur((k + 1) as f64, lambda))
}

/// Upper-tail probability `P[X >= k] = 1 - P[X <= k-1]`.
///
/// Any `k >= 0` is legal; the displayed support bound does not constrain
/// the threshold. `tail(0, lambda)` is exactly 1.
pub fn tail(k: u64, lambda: f64) -> Result<f64> {
    if k == 0 {
        validate_lambda(lambda)?;
        return Ok(1.0);
    }
    Ok((1.0 - cdf(k - 1, lambda)?).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pmf_at_zero() {
        assert_relative_eq!(pmf(0, 2.0).unwrap(), (-2.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_masses_partial_sum_below_one() {
        for &(lambda, bound) in &[(0.5, 20u64), (3.4, 20), (10.0, 20), (10.0, 3)] {
            let ms = masses(lambda, bound).unwrap();
            assert_eq!(ms.len() as u64, bound + 1);
            let sum: f64 = ms.iter().sum();
            assert!(sum <= 1.0 + 1e-12, "lambda={} bound={} sum={}", lambda, bound, sum);
            assert!(sum > 0.0);
        }
    }

    #[test]
    fn test_lambda_zero_is_point_mass() {
        let ms = masses(0.0, 5).unwrap();
        assert_eq!(ms[0], 1.0);
        assert!(ms[1..].iter().all(|&m| m == 0.0));
        assert_eq!(tail(0, 0.0).unwrap(), 1.0);
        assert_eq!(tail(1, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_cdf_matches_mass_sums() {
        let lambda = 3.4;
        let mut acc = 0.0;
        for k in 0..=25u64 {
            acc += pmf(k, lambda).unwrap();
            assert_relative_eq!(cdf(k, lambda).unwrap(), acc, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_tail_at_zero_is_one() {
        for &lambda in &[0.0, 0.7, 3.4, 25.0] {
            assert_eq!(tail(0, lambda).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_tail_non_increasing_in_k() {
        let lambda = 4.2;
        let mut prev = f64::INFINITY;
        for k in 0..=30u64 {
            let t = tail(k, lambda).unwrap();
            assert!((0.0..=1.0).contains(&t));
            assert!(t <= prev + 1e-12, "tail increased at k={}", k);
            prev = t;
        }
    }

    #[test]
    fn test_visits_scenario() {
        // Mean of [2,3,3,4,5] is 3.4; P[X >= 5] = 1 - F(4; 3.4).
        let t = tail(5, 3.4).unwrap();
        assert_relative_eq!(t, 0.2558184, epsilon = 1e-6);
    }

    #[test]
    fn test_threshold_beyond_support_bound_is_legal() {
        // Thresholds past the displayed support stay well-defined.
        let t = tail(40, 3.4).unwrap();
        assert!((0.0..1e-12).contains(&t));
    }

    #[test]
    fn test_invalid_lambda_is_rejected() {
        assert!(logpmf(0, -1.0).is_err());
        assert!(cdf(3, f64::NAN).is_err());
        assert!(tail(0, f64::INFINITY).is_err());
    }
}
