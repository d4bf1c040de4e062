//! Log-space combinatorial helpers used across probability code.

use statrs::function::gamma::ln_gamma;

/// `ln(n!)` via the log-gamma function.
#[inline]
pub fn ln_factorial(n: u64) -> f64 {
    ln_gamma(n as f64 + 1.0)
}

/// `ln(n choose k)` for `k <= n`.
#[inline]
pub fn ln_choose(n: u64, k: u64) -> f64 {
    // ln(n choose k) = ln Γ(n+1) - ln Γ(k+1) - ln Γ(n-k+1)
    let n1 = (n as f64) + 1.0;
    let k1 = (k as f64) + 1.0;
    let nk1 = ((n - k) as f64) + 1.0;
    ln_gamma(n1) - ln_gamma(k1) - ln_gamma(nk1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ln_factorial_small_values() {
        let expected: [f64; 6] = [1.0, 1.0, 2.0, 6.0, 24.0, 120.0];
        for (n, e) in expected.iter().enumerate() {
            assert!((ln_factorial(n as u64) - e.ln()).abs() < 1e-12, "n={}", n);
        }
    }

    #[test]
    fn test_ln_choose_matches_pascal() {
        // C(5, k) = 1, 5, 10, 10, 5, 1
        let row: [f64; 6] = [1.0, 5.0, 10.0, 10.0, 5.0, 1.0];
        for (k, c) in row.iter().enumerate() {
            assert!((ln_choose(5, k as u64) - c.ln()).abs() < 1e-12, "k={}", k);
        }
    }
}
