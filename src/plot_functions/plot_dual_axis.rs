// src/plot_functions/plot_dual_axis.rs

use std::error::Error;

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::constants::{COLOR_DUAL_AXIS_LEFT, COLOR_DUAL_AXIS_RIGHT, LINE_WIDTH_PLOT};
use crate::data_input::export_data::Column;
use crate::plot_framework::{draw_dual_axis_plot, overlimit_range, DualAxisPlotConfig, PlotSeries};

/// Generates a plot of two columns over a shared x column with separate
/// left and right y-axes, each padded by 1% of its own span.
pub fn plot_two_axes(
    x_column: &Column,
    left_column: &Column,
    right_column: &Column,
    output_filename: &str,
    root_name: &str,
    title: &str,
) -> Result<(), Box<dyn Error>> {
    let left_data: Vec<(f64, f64)> = x_column
        .samples
        .iter()
        .zip(left_column.samples.iter())
        .map(|(&t, &v)| (t, v))
        .collect();
    let right_data: Vec<(f64, f64)> = x_column
        .samples
        .iter()
        .zip(right_column.samples.iter())
        .map(|(&t, &v)| (t, v))
        .collect();

    let plot_config = if left_data.is_empty() || right_data.is_empty() {
        // Empty series with dummy ranges; the framework renders a placeholder.
        DualAxisPlotConfig {
            title: title.to_string(),
            x_range: 0.0..1.0,
            left_y_range: 0.0..1.0,
            right_y_range: 0.0..1.0,
            left_series: empty_series(left_column, COLOR_DUAL_AXIS_LEFT),
            right_series: empty_series(right_column, COLOR_DUAL_AXIS_RIGHT),
            x_label: x_column.label.clone(),
            left_y_label: left_column.label.clone(),
            right_y_label: right_column.label.clone(),
        }
    } else {
        let x_arr = Array1::from_iter(left_data.iter().map(|&(t, _)| t));
        let left_arr = Array1::from_iter(left_data.iter().map(|&(_, v)| v));
        let right_arr = Array1::from_iter(right_data.iter().map(|&(_, v)| v));
        let (left_start, left_end) = overlimit_range(*left_arr.min()?, *left_arr.max()?);
        let (right_start, right_end) = overlimit_range(*right_arr.min()?, *right_arr.max()?);

        DualAxisPlotConfig {
            title: title.to_string(),
            x_range: *x_arr.min()?..*x_arr.max()?,
            left_y_range: left_start..left_end,
            right_y_range: right_start..right_end,
            left_series: PlotSeries {
                data: left_data,
                label: left_column.label.clone(),
                color: COLOR_DUAL_AXIS_LEFT,
                stroke_width: LINE_WIDTH_PLOT,
            },
            right_series: PlotSeries {
                data: right_data,
                label: right_column.label.clone(),
                color: COLOR_DUAL_AXIS_RIGHT,
                stroke_width: LINE_WIDTH_PLOT,
            },
            x_label: x_column.label.clone(),
            left_y_label: left_column.label.clone(),
            right_y_label: right_column.label.clone(),
        }
    };

    draw_dual_axis_plot(output_filename, root_name, &plot_config)
}

fn empty_series(column: &Column, color: plotters::style::RGBColor) -> PlotSeries {
    PlotSeries {
        data: Vec::new(),
        label: column.label.clone(),
        color,
        stroke_width: LINE_WIDTH_PLOT,
    }
}

// src/plot_functions/plot_dual_axis.rs
