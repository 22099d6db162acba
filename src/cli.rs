// src/cli.rs

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::{DEFAULT_READ_DELIMITER, DEFAULT_WRITE_DELIMITER};
use crate::data_analysis::moving_average::{high_pass, moving_average};
use crate::data_analysis::regression::linear_regression;
use crate::data_analysis::sequence_ops::{cut_to_shortest, phase_shift};
use crate::data_analysis::waveform::{sample_axis, sine, square_wave, straight_line};
use crate::data_input::export_data::Column;
use crate::data_input::export_parser::read_export;
use crate::data_output::export_writer::write_columns;
use crate::plot_functions::plot_dual_axis::plot_two_axes;
use crate::plot_functions::plot_overlay::plot_overlay;
use crate::plot_functions::plot_regression::plot_regression;
use crate::plot_functions::plot_stacked::plot_stacked;

#[derive(Parser)]
#[command(name = "pghw-export-tools")]
#[command(about = "PGHW time-series export analysis and chart rendering", version)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print column labels, lengths and value ranges of an export
    Inspect {
        input: PathBuf,
        /// Field delimiter
        #[arg(short, long, default_value_t = DEFAULT_READ_DELIMITER)]
        delimiter: char,
    },

    /// Render columns of an export as a line chart
    Render {
        input: PathBuf,
        /// Output PNG (defaults to <input stem>_render.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Column positions to plot (default: all except the x column)
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<usize>,
        /// Column position providing x values (sample index if omitted)
        #[arg(short = 'x', long)]
        x_column: Option<usize>,
        /// Overlay a moving average of each plotted column
        #[arg(long)]
        smooth_window: Option<usize>,
        /// One subplot per column instead of a single overlay
        #[arg(long)]
        stacked: bool,
        /// Plot exactly two columns with separate left/right y-axes
        #[arg(long, conflicts_with_all = ["stacked", "smooth_window"])]
        dual_axis: bool,
        #[arg(short, long, default_value_t = DEFAULT_READ_DELIMITER)]
        delimiter: char,
    },

    /// Moving-average every column into a new export
    Smooth {
        input: PathBuf,
        output: PathBuf,
        /// Moving average window length in samples
        #[arg(short, long)]
        window: usize,
        #[arg(short, long, default_value_t = DEFAULT_READ_DELIMITER)]
        delimiter: char,
        /// Field delimiter for the output file
        #[arg(long, default_value_t = DEFAULT_WRITE_DELIMITER)]
        out_delimiter: char,
    },

    /// High-pass filter (signal minus moving average) every column into a new export
    Highpass {
        input: PathBuf,
        output: PathBuf,
        /// Moving average window length in samples
        #[arg(short, long)]
        window: usize,
        #[arg(short, long, default_value_t = DEFAULT_READ_DELIMITER)]
        delimiter: char,
        /// Field delimiter for the output file
        #[arg(long, default_value_t = DEFAULT_WRITE_DELIMITER)]
        out_delimiter: char,
    },

    /// Phase-shift one column against an x column and write the pair
    Shift {
        input: PathBuf,
        output: PathBuf,
        /// Column position to shift
        #[arg(short, long)]
        column: usize,
        /// Column position providing x values
        #[arg(short = 'x', long, default_value_t = 0)]
        x_column: usize,
        /// Shift in sample positions; the sign selects the direction
        #[arg(short, long, allow_negative_numbers = true)]
        points: isize,
        /// Value of inserted samples
        #[arg(long, default_value_t = 0.0)]
        fill: f64,
        #[arg(short, long, default_value_t = DEFAULT_READ_DELIMITER)]
        delimiter: char,
        /// Field delimiter for the output file
        #[arg(long, default_value_t = DEFAULT_WRITE_DELIMITER)]
        out_delimiter: char,
    },

    /// Fit y = a*x + b between two columns
    Regress {
        input: PathBuf,
        /// Column position providing x values
        #[arg(short = 'x', long, default_value_t = 0)]
        x_column: usize,
        /// Column position providing y values
        #[arg(short = 'y', long)]
        y_column: usize,
        /// Render data and fitted line to this PNG
        #[arg(long)]
        plot: Option<PathBuf>,
        #[arg(short, long, default_value_t = DEFAULT_READ_DELIMITER)]
        delimiter: char,
    },

    /// Generate a synthetic waveform export
    Synth {
        /// Waveform kind
        #[arg(value_enum)]
        kind: WaveformKind,
        /// Output export file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Render the generated waveform to this PNG
        #[arg(long)]
        plot: Option<PathBuf>,
        /// First sample of the time axis
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        /// Time step between samples
        #[arg(long, default_value_t = 0.001)]
        step: f64,
        /// Number of samples
        #[arg(short = 'n', long, default_value_t = 1000)]
        samples: usize,
        /// Frequency (sine and square)
        #[arg(long, default_value_t = 1.0)]
        freq: f64,
        /// Amplitude (sine and square)
        #[arg(long, default_value_t = 1.0)]
        amp: f64,
        /// Phase offset (sine and square)
        #[arg(long, default_value_t = 0.0)]
        phase: f64,
        /// DC offset (square only)
        #[arg(long, default_value_t = 0.0)]
        dc: f64,
        /// Slope (line only)
        #[arg(short = 'a', long, default_value_t = 1.0)]
        slope: f64,
        /// Intercept (line only)
        #[arg(short = 'b', long, default_value_t = 0.0)]
        intercept: f64,
        /// Field delimiter for the output file
        #[arg(long, default_value_t = DEFAULT_WRITE_DELIMITER)]
        out_delimiter: char,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum WaveformKind {
    Sine,
    Square,
    Line,
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter '{delimiter}' is not a single-byte character");
    }
    Ok(delimiter as u8)
}

fn root_name_of(input: &Path) -> String {
    input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

/// Plot functions report `Box<dyn Error>`, which anyhow cannot adopt
/// directly (no Send + Sync bound); carry the message over instead.
fn plot_error(e: Box<dyn std::error::Error>) -> anyhow::Error {
    anyhow::anyhow!("{e}")
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .format_timestamp_secs()
        .init();

    match cli.command {
        Commands::Inspect { input, delimiter } => cmd_inspect(&input, delimiter),
        Commands::Render {
            input,
            output,
            columns,
            x_column,
            smooth_window,
            stacked,
            dual_axis,
            delimiter,
        } => cmd_render(
            &input,
            output.as_deref(),
            &columns,
            x_column,
            smooth_window,
            stacked,
            dual_axis,
            delimiter,
        ),
        Commands::Smooth {
            input,
            output,
            window,
            delimiter,
            out_delimiter,
        } => cmd_transform(
            &input,
            &output,
            delimiter,
            out_delimiter,
            "Smoothing",
            |samples| moving_average(samples, window),
        ),
        Commands::Highpass {
            input,
            output,
            window,
            delimiter,
            out_delimiter,
        } => cmd_transform(
            &input,
            &output,
            delimiter,
            out_delimiter,
            "Filtering",
            |samples| high_pass(samples, window),
        ),
        Commands::Shift {
            input,
            output,
            column,
            x_column,
            points,
            fill,
            delimiter,
            out_delimiter,
        } => cmd_shift(
            &input, &output, column, x_column, points, fill, delimiter, out_delimiter,
        ),
        Commands::Regress {
            input,
            x_column,
            y_column,
            plot,
            delimiter,
        } => cmd_regress(&input, x_column, y_column, plot.as_deref(), delimiter),
        Commands::Synth {
            kind,
            output,
            plot,
            start,
            step,
            samples,
            freq,
            amp,
            phase,
            dc,
            slope,
            intercept,
            out_delimiter,
        } => cmd_synth(
            kind,
            output.as_deref(),
            plot.as_deref(),
            start,
            step,
            samples,
            freq,
            amp,
            phase,
            dc,
            slope,
            intercept,
            out_delimiter,
        ),
    }
}

fn cmd_inspect(input: &Path, delimiter: char) -> Result<()> {
    let (columns, preamble_lines) = read_export(input, delimiter_byte(delimiter)?, &[])
        .with_context(|| format!("reading '{}'", input.display()))?;

    println!(
        "{}: {} column(s), {} preamble line(s)",
        input.display(),
        columns.len(),
        preamble_lines
    );
    for (i, column) in columns.iter().enumerate() {
        if column.is_empty() {
            println!("  [{i}] '{}': 0 sample(s)", column.label);
            continue;
        }
        let (min, max) = column
            .samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        println!(
            "  [{i}] '{}': {} sample(s), min {min}, max {max}",
            column.label,
            column.len()
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    positions: &[usize],
    x_position: Option<usize>,
    smooth_window: Option<usize>,
    stacked: bool,
    dual_axis: bool,
    delimiter: char,
) -> Result<()> {
    let (columns, _) = read_export(input, delimiter_byte(delimiter)?, &[])
        .with_context(|| format!("reading '{}'", input.display()))?;

    if let Some(position) = x_position {
        if position >= columns.len() {
            bail!(
                "x column position {position} out of range (file has {} columns)",
                columns.len()
            );
        }
    }

    let selected: Vec<usize> = if positions.is_empty() {
        (0..columns.len()).filter(|&i| Some(i) != x_position).collect()
    } else {
        positions.to_vec()
    };

    // Group the x column (if any) in front of the plotted columns, so the
    // whole set can be cut to one common length.
    let mut group: Vec<Column> = Vec::new();
    if let Some(position) = x_position {
        group.push(columns[position].clone());
    }
    for &position in &selected {
        let column = columns.get(position).ok_or_else(|| {
            anyhow::anyhow!(
                "column position {position} out of range (file has {} columns)",
                columns.len()
            )
        })?;
        group.push(column.clone());
        if let Some(window) = smooth_window {
            group.push(Column::new(
                format!("{} (MA {window})", column.label),
                moving_average(&column.samples, window),
            ));
        }
    }
    cut_to_shortest(&mut group);

    let (x_column, plotted) = if x_position.is_some() {
        (Some(&group[0]), &group[1..])
    } else {
        (None, &group[..])
    };

    let root_name = root_name_of(input);
    let default_output = format!("{root_name}_render.png");
    let output_filename = output.map_or(default_output, |p| p.display().to_string());

    if dual_axis {
        let Some(x) = x_column else {
            bail!("--dual-axis needs an x column (--x-column)");
        };
        if plotted.len() != 2 {
            bail!(
                "--dual-axis needs exactly two plotted columns, got {}",
                plotted.len()
            );
        }
        let title = format!("{} / {}", plotted[0].label, plotted[1].label);
        return plot_two_axes(x, &plotted[0], &plotted[1], &output_filename, &root_name, &title)
            .map_err(plot_error);
    }

    if stacked {
        plot_stacked(plotted, x_column, &output_filename, &root_name).map_err(plot_error)
    } else {
        plot_overlay(plotted, x_column, &output_filename, &root_name, &root_name)
            .map_err(plot_error)
    }
}

fn cmd_transform(
    input: &Path,
    output: &Path,
    delimiter: char,
    out_delimiter: char,
    verb: &str,
    transform: impl Fn(&[f64]) -> Vec<f64>,
) -> Result<()> {
    let (mut columns, _) = read_export(input, delimiter_byte(delimiter)?, &[])
        .with_context(|| format!("reading '{}'", input.display()))?;

    let pb = ProgressBar::new(columns.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green/white} {pos}/{len} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("{verb} columns"));
    for column in &mut columns {
        column.samples = transform(&column.samples);
        pb.inc(1);
    }
    pb.finish_and_clear();

    write_columns(output, &columns, delimiter_byte(out_delimiter)?, true)
        .with_context(|| format!("writing '{}'", output.display()))?;
    println!(
        "Wrote {} column(s) to '{}'.",
        columns.len(),
        output.display()
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_shift(
    input: &Path,
    output: &Path,
    position: usize,
    x_position: usize,
    points: isize,
    fill: f64,
    delimiter: char,
    out_delimiter: char,
) -> Result<()> {
    let (columns, _) = read_export(input, delimiter_byte(delimiter)?, &[x_position, position])
        .with_context(|| format!("reading '{}'", input.display()))?;
    let (x_column, column) = (&columns[0], &columns[1]);
    if x_column.len() != column.len() {
        bail!(
            "columns '{}' and '{}' differ in length ({} vs {})",
            x_column.label,
            column.label,
            x_column.len(),
            column.len()
        );
    }

    let (x_out, y_out) = phase_shift(&x_column.samples, &column.samples, points, fill);
    let shifted = [
        Column::new(x_column.label.clone(), x_out),
        Column::new(format!("{} (shifted {points})", column.label), y_out),
    ];
    write_columns(output, &shifted, delimiter_byte(out_delimiter)?, true)
        .with_context(|| format!("writing '{}'", output.display()))?;
    println!(
        "Wrote shifted column '{}' to '{}'.",
        column.label,
        output.display()
    );
    Ok(())
}

fn cmd_regress(
    input: &Path,
    x_position: usize,
    y_position: usize,
    plot: Option<&Path>,
    delimiter: char,
) -> Result<()> {
    let (columns, _) = read_export(input, delimiter_byte(delimiter)?, &[x_position, y_position])
        .with_context(|| format!("reading '{}'", input.display()))?;
    let (x_column, y_column) = (&columns[0], &columns[1]);

    let Some((a, b)) = linear_regression(&x_column.samples, &y_column.samples) else {
        bail!(
            "no regression line is defined for '{}' vs '{}' (degenerate input)",
            y_column.label,
            x_column.label
        );
    };

    println!(
        "'{}' vs '{}': y = {a} * x + {b}",
        y_column.label, x_column.label
    );
    if let Some(plot_path) = plot {
        plot_regression(
            x_column,
            y_column,
            (a, b),
            &plot_path.display().to_string(),
            &root_name_of(input),
        )
        .map_err(plot_error)?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_synth(
    kind: WaveformKind,
    output: Option<&Path>,
    plot: Option<&Path>,
    start: f64,
    step: f64,
    samples: usize,
    freq: f64,
    amp: f64,
    phase: f64,
    dc: f64,
    slope: f64,
    intercept: f64,
    out_delimiter: char,
) -> Result<()> {
    if output.is_none() && plot.is_none() {
        bail!("nothing to do: pass --output and/or --plot");
    }

    let axis = sample_axis(start, step, samples);
    let (label, values) = match kind {
        WaveformKind::Sine => (
            format!("sine (freq {freq}, amp {amp}, phase {phase})"),
            sine(&axis, freq, amp, phase),
        ),
        WaveformKind::Square => (
            format!("square (freq {freq}, amp {amp}, phase {phase}, dc {dc})"),
            square_wave(&axis, freq, amp, phase, dc),
        ),
        WaveformKind::Line => (
            format!("line (a {slope}, b {intercept})"),
            straight_line(&axis, slope, intercept),
        ),
    };
    let columns = [Column::new("t", axis), Column::new(label, values)];

    if let Some(output_path) = output {
        write_columns(output_path, &columns, delimiter_byte(out_delimiter)?, true)
            .with_context(|| format!("writing '{}'", output_path.display()))?;
        println!("Wrote synthetic waveform to '{}'.", output_path.display());
    }
    if let Some(plot_path) = plot {
        plot_overlay(
            &columns[1..],
            Some(&columns[0]),
            &plot_path.display().to_string(),
            "synth",
            &columns[1].label,
        )
        .map_err(plot_error)?;
    }
    Ok(())
}

// src/cli.rs
