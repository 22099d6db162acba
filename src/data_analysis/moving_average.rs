// src/data_analysis/moving_average.rs

/// Centered moving average over an equidistant series.
///
/// Even window lengths are bumped to the next odd value so the window has a
/// middle sample. The output always has the same length as the input; the
/// half-window margins at both ends, where the full window does not fit,
/// are left at zero. Runs on a single sliding sum, so cost is O(n)
/// regardless of window length.
pub fn moving_average(data: &[f64], window: usize) -> Vec<f64> {
    let window = if window % 2 == 0 { window + 1 } else { window };
    let half = window / 2;
    let n = data.len();
    if n < window {
        return vec![0.0; n];
    }

    let mut averaged = vec![0.0; n];
    let mut sum: f64 = data[..window].iter().sum();
    averaged[half] = sum / window as f64;
    for i in window..n {
        sum += data[i] - data[i - window];
        averaged[i - half] = sum / window as f64;
    }
    averaged
}

/// Simple high-pass filter: the original signal minus its moving average.
///
/// Same length as the input. Within the zero margins of the moving average
/// the signal passes through unchanged.
pub fn high_pass(data: &[f64], window: usize) -> Vec<f64> {
    let low_pass = moving_average(data, window);
    data.iter()
        .zip(low_pass.iter())
        .map(|(y, lp)| y - lp)
        .collect()
}


// src/data_analysis/moving_average.rs
