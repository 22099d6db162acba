// src/plot_functions/plot_overlay.rs

use std::error::Error;

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::constants::{LINE_WIDTH_PLOT, SERIES_PALETTE};
use crate::data_input::export_data::Column;
use crate::plot_framework::{calculate_range, draw_line_plot, PlotConfig, PlotSeries};

/// Generates an overlay line chart of the given columns against a shared x
/// column, or against the sample index when no x column is given.
///
/// Series colors come from the fixed palette by position, cycling when more
/// than twelve series are plotted. Columns longer than the x column are cut
/// off at its length.
pub fn plot_overlay(
    columns: &[Column],
    x_column: Option<&Column>,
    output_filename: &str,
    root_name: &str,
    title: &str,
) -> Result<(), Box<dyn Error>> {
    let mut series: Vec<PlotSeries> = Vec::new();
    for (i, column) in columns.iter().enumerate() {
        let data: Vec<(f64, f64)> = match x_column {
            Some(x) => x
                .samples
                .iter()
                .zip(column.samples.iter())
                .map(|(&t, &v)| (t, v))
                .collect(),
            None => column
                .samples
                .iter()
                .enumerate()
                .map(|(j, &v)| (j as f64, v))
                .collect(),
        };
        series.push(PlotSeries {
            data,
            label: column.label.clone(),
            color: SERIES_PALETTE[i % SERIES_PALETTE.len()],
            stroke_width: LINE_WIDTH_PLOT,
        });
    }

    let x_label = x_column.map_or("Sample Index".to_string(), |x| x.label.clone());
    let all_x: Vec<f64> = series
        .iter()
        .flat_map(|s| s.data.iter().map(|&(t, _)| t))
        .collect();
    let all_y: Vec<f64> = series
        .iter()
        .flat_map(|s| s.data.iter().map(|&(_, v)| v))
        .collect();

    // No drawable points: hand the framework an empty config so it renders
    // the placeholder message instead.
    if all_x.is_empty() {
        let plot_config = PlotConfig {
            title: title.to_string(),
            x_range: 0.0..1.0,
            y_range: 0.0..1.0,
            series: Vec::new(),
            x_label,
            y_label: "Value".to_string(),
        };
        return draw_line_plot(output_filename, root_name, &plot_config);
    }

    let x_arr = Array1::from(all_x);
    let y_arr = Array1::from(all_y);
    let (x_min, x_max) = (*x_arr.min()?, *x_arr.max()?);
    let (y_start, y_end) = calculate_range(*y_arr.min()?, *y_arr.max()?);

    let plot_config = PlotConfig {
        title: title.to_string(),
        x_range: x_min..x_max,
        y_range: y_start..y_end,
        series,
        x_label,
        y_label: "Value".to_string(),
    };
    draw_line_plot(output_filename, root_name, &plot_config)
}

// src/plot_functions/plot_overlay.rs
