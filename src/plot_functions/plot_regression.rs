// src/plot_functions/plot_regression.rs

use std::error::Error;

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::constants::{COLOR_REGRESSION_DATA, COLOR_REGRESSION_FIT, LINE_WIDTH_PLOT};
use crate::data_analysis::waveform::straight_line;
use crate::data_input::export_data::Column;
use crate::plot_framework::{calculate_range, draw_line_plot, PlotConfig, PlotSeries};

/// Generates a chart of a coordinate set together with its fitted
/// regression line `y = a*x + b`.
pub fn plot_regression(
    x_column: &Column,
    y_column: &Column,
    coefficients: (f64, f64),
    output_filename: &str,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let (a, b) = coefficients;
    let data: Vec<(f64, f64)> = x_column
        .samples
        .iter()
        .zip(y_column.samples.iter())
        .map(|(&t, &v)| (t, v))
        .collect();
    let fitted: Vec<(f64, f64)> = x_column
        .samples
        .iter()
        .zip(straight_line(&x_column.samples, a, b))
        .map(|(&t, v)| (t, v))
        .collect();

    if data.is_empty() {
        let plot_config = PlotConfig {
            title: "Linear Regression".to_string(),
            x_range: 0.0..1.0,
            y_range: 0.0..1.0,
            series: Vec::new(),
            x_label: x_column.label.clone(),
            y_label: y_column.label.clone(),
        };
        return draw_line_plot(output_filename, root_name, &plot_config);
    }

    let x_arr = Array1::from_iter(data.iter().map(|&(t, _)| t));
    let y_arr = Array1::from_iter(data.iter().map(|&(_, v)| v).chain(fitted.iter().map(|&(_, v)| v)));
    let (y_start, y_end) = calculate_range(*y_arr.min()?, *y_arr.max()?);

    let plot_config = PlotConfig {
        title: format!("Linear Regression: y = {a:.4}x + {b:.4}"),
        x_range: *x_arr.min()?..*x_arr.max()?,
        y_range: y_start..y_end,
        series: vec![
            PlotSeries {
                data,
                label: y_column.label.clone(),
                color: COLOR_REGRESSION_DATA,
                stroke_width: LINE_WIDTH_PLOT,
            },
            PlotSeries {
                data: fitted,
                label: format!("fit: y = {a:.4}x + {b:.4}"),
                color: COLOR_REGRESSION_FIT,
                stroke_width: LINE_WIDTH_PLOT + 1,
            },
        ],
        x_label: x_column.label.clone(),
        y_label: y_column.label.clone(),
    };
    draw_line_plot(output_filename, root_name, &plot_config)
}

// src/plot_functions/plot_regression.rs
