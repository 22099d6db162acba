// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::PathElement;
use plotters::element::Text;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    DUAL_AXIS_OVERLIMIT_FACTOR, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND,
    FONT_SIZE_MAIN_TITLE, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Value range for one side of a dual-axis plot, padded by 1% of its own
/// span (fixed padding when the span is degenerate).
pub fn overlimit_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let span = max - min;
    let overlimit = if span < 1e-6 {
        0.5
    } else {
        span * DUAL_AXIS_OVERLIMIT_FACTOR
    };
    (min - overlimit, max + overlimit)
}

/// Axis tick label formatting: "k"/"M" notation for large magnitudes, one
/// decimal for small fractional values, plain integers otherwise.
pub fn format_axis_value(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 10.0 && y.fract() != 0.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    chart_name: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Approximate character width relative to font size, for centering.
    const CHAR_WIDTH_RATIO: f32 = 0.6;

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{chart_name} Data Unavailable: {reason}");

    let estimated_text_width =
        (message.len() as f32 * FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

#[derive(Clone)]
pub struct DualAxisPlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub left_y_range: Range<f64>,
    pub right_y_range: Range<f64>,
    pub left_series: PlotSeries,
    pub right_series: PlotSeries,
    pub x_label: String,
    pub left_y_label: String,
    pub right_y_label: String,
}

/// Draws a single chart using a PlotConfig struct.
fn draw_single_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .y_label_formatter(&|y| format_axis_value(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            let color = s.color;
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }
    Ok(())
}

/// Creates a single-chart plot image with the file name banner on top.
pub fn draw_line_plot(
    output_filename: &str,
    root_name: &str,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);

    let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
    let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
        && plot_config.y_range.end > plot_config.y_range.start;
    if has_data && valid_ranges {
        draw_single_chart(&margined_root_area, plot_config)?;
    } else {
        let reason = if !has_data {
            "No data points"
        } else {
            "Invalid ranges"
        };
        draw_unavailable_message(&margined_root_area, &plot_config.title, reason)?;
    }

    root_area.present()?;
    println!("  Plot saved as '{output_filename}'.");
    Ok(())
}

/// Creates a stacked plot image with one subplot per config, split evenly
/// down the page. `None` entries render a placeholder message.
pub fn draw_stacked_plot(
    output_filename: &str,
    root_name: &str,
    plot_type_name: &str,
    configs: &[Option<PlotConfig>],
) -> Result<(), Box<dyn Error>> {
    if configs.is_empty() {
        println!("  Skipping '{output_filename}' plot saving: no subplots requested.");
        return Ok(());
    }

    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((configs.len(), 1));
    let mut any_subplot_drawn = false;

    for (idx, config_option) in configs.iter().enumerate() {
        let area = &sub_plot_areas[idx];
        match config_option {
            Some(plot_config) => {
                let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
                let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
                    && plot_config.y_range.end > plot_config.y_range.start;
                if has_data && valid_ranges {
                    draw_single_chart(area, plot_config)?;
                    any_subplot_drawn = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(area, &plot_config.title, reason)?;
                }
            }
            None => {
                draw_unavailable_message(area, plot_type_name, "Calculation/Data Extraction Failed")?;
            }
        }
    }

    if any_subplot_drawn {
        root_area.present()?;
        println!("  Stacked plot saved as '{output_filename}'.");
    } else {
        root_area.present()?;
        println!("  Skipping '{output_filename}' plot saving: No data available for any subplot, only placeholder messages shown.");
    }
    Ok(())
}

/// Creates a two-series plot with separate left and right y-axes.
pub fn draw_dual_axis_plot(
    output_filename: &str,
    root_name: &str,
    config: &DualAxisPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);

    let has_data = !config.left_series.data.is_empty() && !config.right_series.data.is_empty();
    let valid_ranges = config.x_range.end > config.x_range.start
        && config.left_y_range.end > config.left_y_range.start
        && config.right_y_range.end > config.right_y_range.start;
    if !has_data || !valid_ranges {
        let reason = if !has_data {
            "No data points"
        } else {
            "Invalid ranges"
        };
        draw_unavailable_message(&margined_root_area, &config.title, reason)?;
        root_area.present()?;
        println!("  Plot saved as '{output_filename}' (placeholder).");
        return Ok(());
    }

    let mut chart = ChartBuilder::on(&margined_root_area)
        .caption(&config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(config.x_range.clone(), config.left_y_range.clone())?
        .set_secondary_coord(config.x_range.clone(), config.right_y_range.clone());

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.left_y_label)
        .x_labels(20)
        .y_labels(10)
        .y_label_formatter(&|y| format_axis_value(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc(&config.right_y_label)
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let left_color = config.left_series.color;
    chart
        .draw_series(LineSeries::new(
            config.left_series.data.iter().cloned(),
            left_color.stroke_width(config.left_series.stroke_width),
        ))?
        .label(&config.left_series.label)
        .legend(move |(x, y)| {
            PathElement::new(
                vec![(x, y), (x + 20, y)],
                left_color.stroke_width(LINE_WIDTH_LEGEND),
            )
        });

    let right_color = config.right_series.color;
    chart
        .draw_secondary_series(LineSeries::new(
            config.right_series.data.iter().cloned(),
            right_color.stroke_width(config.right_series.stroke_width),
        ))?
        .label(&config.right_series.label)
        .legend(move |(x, y)| {
            PathElement::new(
                vec![(x, y), (x + 20, y)],
                right_color.stroke_width(LINE_WIDTH_LEGEND),
            )
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", FONT_SIZE_LEGEND))
        .draw()?;

    root_area.present()?;
    println!("  Dual-axis plot saved as '{output_filename}'.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_range_pads_by_fifteen_percent() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min + 1.5).abs() < 1e-9);
        assert!((max - 11.5).abs() < 1e-9);
    }

    #[test]
    fn calculate_range_handles_swapped_and_degenerate_input() {
        let (min, max) = calculate_range(10.0, 0.0);
        assert!(min < 0.0 && max > 10.0);
        let (min, max) = calculate_range(3.0, 3.0);
        assert!((min - 2.5).abs() < 1e-9);
        assert!((max - 3.5).abs() < 1e-9);
    }

    #[test]
    fn overlimit_range_pads_by_one_percent() {
        let (min, max) = overlimit_range(0.0, 100.0);
        assert!((min + 1.0).abs() < 1e-9);
        assert!((max - 101.0).abs() < 1e-9);
    }
}

// src/plot_framework.rs
