// src/plot_functions/plot_stacked.rs

use std::error::Error;

use crate::constants::{LINE_WIDTH_PLOT, SERIES_PALETTE};
use crate::data_input::export_data::Column;
use crate::plot_framework::{calculate_range, draw_stacked_plot, PlotConfig, PlotSeries};

/// Generates a stacked plot with one subplot per column, each scaled to its
/// own value range, against a shared x column or the sample index.
pub fn plot_stacked(
    columns: &[Column],
    x_column: Option<&Column>,
    output_filename: &str,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let configs: Vec<Option<PlotConfig>> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| build_subplot(i, column, x_column))
        .collect();
    draw_stacked_plot(output_filename, root_name, "Column", &configs)
}

fn build_subplot(index: usize, column: &Column, x_column: Option<&Column>) -> Option<PlotConfig> {
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
    if data.is_empty() {
        return None;
    }

    let (time_min, time_max) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(t, _)| {
            (lo.min(t), hi.max(t))
        });
    let (val_min, val_max) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, v)| {
            (lo.min(v), hi.max(v))
        });
    if !time_min.is_finite() || !val_min.is_finite() {
        return None;
    }
    let (y_start, y_end) = calculate_range(val_min, val_max);

    let x_label = x_column.map_or("Sample Index".to_string(), |x| x.label.clone());
    Some(PlotConfig {
        title: column.label.clone(),
        x_range: time_min..time_max,
        y_range: y_start..y_end,
        series: vec![PlotSeries {
            data,
            label: column.label.clone(),
            color: SERIES_PALETTE[index % SERIES_PALETTE.len()],
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label,
        y_label: "Value".to_string(),
    })
}

// src/plot_functions/plot_stacked.rs
