// src/data_analysis/regression.rs

/// Least-squares fit of `y = a*x + b` over a coordinate set, using the
/// closed-form sums.
///
/// Returns `None` when no line is defined: fewer than two points, length
/// mismatch, or no variance in `x`.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Option<(f64, f64)> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let n = x.len() as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_x_sqr = 0.0;
    let mut sum_xy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sum_x += xi;
        sum_y += yi;
        sum_x_sqr += xi * xi;
        sum_xy += xi * yi;
    }

    let denominator = n * sum_x_sqr - sum_x * sum_x;
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }

    let a = (n * sum_xy - sum_x * sum_y) / denominator;
    let b = (sum_y - a * sum_x) / n;
    if !a.is_finite() || !b.is_finite() {
        return None;
    }
    Some((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_line() {
        let x: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|t| 2.5 * t - 4.0).collect();
        let (a, b) = linear_regression(&x, &y).unwrap();
        assert!((a - 2.5).abs() < 1e-9);
        assert!((b + 4.0).abs() < 1e-9);
    }

    #[test]
    fn fits_noiseless_horizontal_line() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y = vec![7.0, 7.0, 7.0, 7.0];
        let (a, b) = linear_regression(&x, &y).unwrap();
        assert!(a.abs() < 1e-12);
        assert!((b - 7.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_input_returns_none() {
        assert!(linear_regression(&[], &[]).is_none());
        assert!(linear_regression(&[1.0], &[2.0]).is_none());
        assert!(linear_regression(&[1.0, 2.0], &[1.0]).is_none());
        // No variance in x: the denominator collapses to zero.
        assert!(linear_regression(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_none());
    }
}

// src/data_analysis/regression.rs
