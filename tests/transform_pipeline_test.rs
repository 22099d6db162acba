// tests/transform_pipeline_test.rs
//
// End-to-end checks of the transform layer the way the CLI composes it:
// generate a waveform, push it through a transform, write and re-read it.

use tempfile::NamedTempFile;

use pghw_export_tools::data_analysis::moving_average::{high_pass, moving_average};
use pghw_export_tools::data_analysis::regression::linear_regression;
use pghw_export_tools::data_analysis::sequence_ops::phase_shift;
use pghw_export_tools::data_analysis::waveform::{sample_axis, sine, straight_line};
use pghw_export_tools::data_input::export_data::Column;
use pghw_export_tools::data_input::export_parser::read_export;
use pghw_export_tools::data_output::export_writer::write_columns;

#[test]
fn regression_recovers_synthetic_line_after_roundtrip() {
    let axis = sample_axis(0.0, 0.5, 200);
    let line = straight_line(&axis, -1.25, 8.0);
    let columns = vec![Column::new("t", axis), Column::new("line", line)];

    let file = NamedTempFile::new().expect("create temp file");
    write_columns(file.path(), &columns, b';', true).expect("write export");
    let (read_back, _) = read_export(file.path(), b';', &[]).expect("read export");

    let (a, b) = linear_regression(&read_back[0].samples, &read_back[1].samples)
        .expect("regression defined");
    assert!((a + 1.25).abs() < 1e-6);
    assert!((b - 8.0).abs() < 1e-6);
}

#[test]
fn smoothing_a_sine_reduces_interior_amplitude() {
    // 10 Hz sine sampled at 1 kHz; a 101-sample window spans a full period
    // and must damp the oscillation well below the raw amplitude.
    let axis = sample_axis(0.0, 0.001, 1000);
    let wave = sine(&axis, 10.0, 1.0, 0.0);
    let smoothed = moving_average(&wave, 101);

    assert_eq!(smoothed.len(), wave.len());
    let interior_max = smoothed[50..950]
        .iter()
        .fold(0.0_f64, |acc, &v| acc.max(v.abs()));
    assert!(interior_max < 0.05, "interior max {interior_max} too large");
}

#[test]
fn high_pass_keeps_fast_component() {
    // Slow ramp plus fast sine: the high-pass output should stay centered
    // near zero in the interior even though the raw signal drifts upward.
    let axis = sample_axis(0.0, 0.001, 2000);
    let slow = straight_line(&axis, 100.0, 0.0);
    let fast = sine(&axis, 50.0, 0.5, 0.0);
    let signal: Vec<f64> = slow.iter().zip(fast.iter()).map(|(s, f)| s + f).collect();

    let filtered = high_pass(&signal, 101);
    assert_eq!(filtered.len(), signal.len());
    let interior_mean: f64 =
        filtered[200..1800].iter().sum::<f64>() / filtered[200..1800].len() as f64;
    assert!(interior_mean.abs() < 0.1, "interior mean {interior_mean} drifted");
}

#[test]
fn phase_shift_roundtrips_through_export_files() {
    let axis = sample_axis(0.0, 1.0, 6);
    let values = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0];
    let (x_out, y_out) = phase_shift(&axis, &values, 2, 0.0);

    let columns = vec![Column::new("t", x_out), Column::new("shifted", y_out)];
    let file = NamedTempFile::new().expect("create temp file");
    write_columns(file.path(), &columns, b';', true).expect("write export");
    let (read_back, _) = read_export(file.path(), b';', &[]).expect("read export");

    assert_eq!(read_back[0].samples, axis);
    assert_eq!(
        read_back[1].samples,
        vec![0.0, 0.0, 10.0, 20.0, 30.0, 40.0]
    );
}
