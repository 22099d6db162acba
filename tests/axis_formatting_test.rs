// tests/axis_formatting_test.rs

use pghw_export_tools::plot_framework::format_axis_value;

#[test]
fn small_fractional_values_keep_one_decimal() {
    assert_eq!(format_axis_value(0.5), "0.5");
    assert_eq!(format_axis_value(5.7), "5.7");
    assert_eq!(format_axis_value(-1.25), "-1.2");
}

#[test]
fn small_integral_values_format_plain() {
    assert_eq!(format_axis_value(0.0), "0");
    assert_eq!(format_axis_value(10.0), "10");
    assert_eq!(format_axis_value(100.0), "100");
    assert_eq!(format_axis_value(-42.0), "-42");
}

#[test]
fn large_values_use_k_notation() {
    assert_eq!(format_axis_value(1000.0), "1k");
    assert_eq!(format_axis_value(5000.0), "5k");
    assert_eq!(format_axis_value(12500.0), "12k");
    assert_eq!(format_axis_value(-3000.0), "-3k");
}

#[test]
fn very_large_values_use_m_notation() {
    assert_eq!(format_axis_value(1_000_000.0), "1.0M");
    assert_eq!(format_axis_value(2_500_000.0), "2.5M");
}
