// src/constants.rs

use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: u32 = 24;
pub const FONT_SIZE_CHART_TITLE: u32 = 20;
pub const FONT_SIZE_AXIS_LABEL: u32 = 14;
pub const FONT_SIZE_LEGEND: u32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 24;

// Stroke widths for lines.
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Fixed series palette, assigned by series position in a plot.
pub const SERIES_PALETTE: [RGBColor; 12] = [
    RGBColor(0, 0, 0),       // black
    RGBColor(0, 0, 255),     // blue
    RGBColor(128, 0, 128),   // purple
    RGBColor(0, 128, 0),     // green
    RGBColor(255, 255, 0),   // yellow
    RGBColor(255, 0, 0),     // red
    RGBColor(255, 165, 0),   // orange
    RGBColor(0, 255, 255),   // cyan
    RGBColor(210, 105, 30),  // chocolate
    RGBColor(255, 20, 147),  // deeppink
    RGBColor(250, 128, 114), // salmon
    RGBColor(128, 128, 0),   // olive
];

// --- Plot Color Assignments ---
pub const COLOR_DUAL_AXIS_LEFT: RGBColor = RGBColor(0, 0, 255);
pub const COLOR_DUAL_AXIS_RIGHT: RGBColor = RGBColor(255, 0, 0);
pub const COLOR_REGRESSION_DATA: RGBColor = RGBColor(0, 0, 0);
pub const COLOR_REGRESSION_FIT: RGBColor = RGBColor(255, 0, 0);

// Dual-axis plots pad each value range by this fraction of its span.
pub const DUAL_AXIS_OVERLIMIT_FACTOR: f64 = 0.01;

// Export delimiters. Reads default to comma, writes to semicolon.
pub const DEFAULT_READ_DELIMITER: char = ',';
pub const DEFAULT_WRITE_DELIMITER: char = ';';

// src/constants.rs
