// src/data_analysis/waveform.rs

use std::f64::consts::TAU;

/// Sine curve matched to an input time axis: `amp * sin(TAU*freq*t + phase)`.
pub fn sine(x: &[f64], freq: f64, amp: f64, phase: f64) -> Vec<f64> {
    x.iter()
        .map(|t| amp * (TAU * freq * t + phase).sin())
        .collect()
}

/// Square wave matched to an input time axis, symmetric around `dc`.
///
/// The wave is high for the first half of each wavelength, starting at
/// `phase`. The position within the wavelength uses the Euclidean
/// remainder, so samples before `phase` land in the correct half as well.
/// A non-positive or non-finite frequency yields a flat `dc` line.
pub fn square_wave(x: &[f64], freq: f64, amp: f64, phase: f64, dc: f64) -> Vec<f64> {
    if !(freq > 0.0) || !freq.is_finite() {
        return vec![dc; x.len()];
    }
    let wavelength = 1.0 / freq;
    x.iter()
        .map(|t| {
            let position = (t - phase).rem_euclid(wavelength);
            if position < wavelength / 2.0 {
                amp + dc
            } else {
                -amp + dc
            }
        })
        .collect()
}

/// Straight line `y = a*t + b` evaluated over a time axis.
pub fn straight_line(x: &[f64], a: f64, b: f64) -> Vec<f64> {
    x.iter().map(|t| a * t + b).collect()
}

/// Equidistant time axis: `count` samples starting at `start`, `step` apart.
pub fn sample_axis(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_hits_known_points() {
        let x = vec![0.0, 0.25, 0.5, 0.75];
        let wave = sine(&x, 1.0, 2.0, 0.0);
        assert!(wave[0].abs() < 1e-12);
        assert!((wave[1] - 2.0).abs() < 1e-12);
        assert!(wave[2].abs() < 1e-9);
        assert!((wave[3] + 2.0).abs() < 1e-9);
    }

    #[test]
    fn sine_phase_offsets_the_curve() {
        let x = vec![0.0];
        let wave = sine(&x, 1.0, 1.0, std::f64::consts::FRAC_PI_2);
        assert!((wave[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn square_wave_plateaus_and_dc_offset() {
        let x = vec![0.0, 0.25, 0.5, 0.75];
        let wave = square_wave(&x, 1.0, 3.0, 0.0, 1.0);
        assert_eq!(wave, vec![4.0, 4.0, -2.0, -2.0]);
    }

    #[test]
    fn square_wave_before_phase_start() {
        // Negative (t - phase) still falls in the right half-wavelength.
        let x = vec![-0.75, -0.25];
        let wave = square_wave(&x, 1.0, 1.0, 0.0, 0.0);
        assert_eq!(wave, vec![1.0, -1.0]);
    }

    #[test]
    fn square_wave_zero_frequency_is_flat() {
        let x = vec![0.0, 1.0, 2.0];
        assert_eq!(square_wave(&x, 0.0, 5.0, 0.0, 2.0), vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn straight_line_matches_equation() {
        let x = vec![-1.0, 0.0, 2.0];
        assert_eq!(straight_line(&x, 3.0, 1.0), vec![-2.0, 1.0, 7.0]);
    }

    #[test]
    fn sample_axis_is_equidistant() {
        let axis = sample_axis(1.0, 0.5, 4);
        assert_eq!(axis, vec![1.0, 1.5, 2.0, 2.5]);
    }
}

// src/data_analysis/waveform.rs
