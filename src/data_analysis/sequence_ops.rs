// src/data_analysis/sequence_ops.rs

use crate::data_input::export_data::Column;

/// Shifts `y` against `x` by a number of sample positions.
///
/// Only meaningful for equidistant data. A positive shift delays `y` (fill
/// values are inserted at the start), a negative shift advances it (fill
/// values at the end). Both returned sequences keep the input length, and
/// `x` passes through unchanged. A shift magnitude at or beyond the length
/// yields an all-fill `y`.
pub fn phase_shift(x: &[f64], y: &[f64], shift: isize, fill: f64) -> (Vec<f64>, Vec<f64>) {
    debug_assert_eq!(x.len(), y.len(), "x and y must have the same length");
    let n = x.len();
    let offset = shift.unsigned_abs().min(n);

    let x_out = x.to_vec();
    let mut y_out = Vec::with_capacity(n);
    if shift >= 0 {
        y_out.resize(offset, fill);
        y_out.extend_from_slice(&y[..n - offset]);
    } else {
        y_out.extend_from_slice(&y[offset..]);
        y_out.resize(n, fill);
    }
    (x_out, y_out)
}

/// Truncates every column in the group to the length of the shortest one,
/// dropping samples from the end.
pub fn cut_to_shortest(columns: &mut [Column]) {
    let min_length = columns.iter().map(Column::len).min().unwrap_or(0);
    for column in columns {
        column.samples.truncate(min_length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_shift_delays_with_fill_at_start() {
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let y = vec![10.0, 11.0, 12.0, 13.0, 14.0];
        let (x_out, y_out) = phase_shift(&x, &y, 2, 0.0);
        assert_eq!(x_out, x);
        assert_eq!(y_out, vec![0.0, 0.0, 10.0, 11.0, 12.0]);
    }

    #[test]
    fn negative_shift_advances_with_fill_at_end() {
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let y = vec![10.0, 11.0, 12.0, 13.0, 14.0];
        let (x_out, y_out) = phase_shift(&x, &y, -2, -1.0);
        assert_eq!(x_out, x);
        assert_eq!(y_out, vec![12.0, 13.0, 14.0, -1.0, -1.0]);
    }

    #[test]
    fn zero_shift_is_identity() {
        let x = vec![0.0, 1.0];
        let y = vec![5.0, 6.0];
        let (x_out, y_out) = phase_shift(&x, &y, 0, 9.0);
        assert_eq!(x_out, x);
        assert_eq!(y_out, y);
    }

    #[test]
    fn oversized_shift_fills_everything() {
        let x = vec![0.0, 1.0, 2.0];
        let y = vec![1.0, 2.0, 3.0];
        let (_, y_out) = phase_shift(&x, &y, 10, 7.0);
        assert_eq!(y_out, vec![7.0, 7.0, 7.0]);
        let (_, y_out) = phase_shift(&x, &y, -10, 7.0);
        assert_eq!(y_out, vec![7.0, 7.0, 7.0]);
    }

    #[test]
    fn cut_to_shortest_equalizes_lengths() {
        let mut columns = vec![
            Column::new("a", vec![1.0, 2.0, 3.0, 4.0]),
            Column::new("b", vec![1.0, 2.0]),
            Column::new("c", vec![1.0, 2.0, 3.0]),
        ];
        cut_to_shortest(&mut columns);
        assert!(columns.iter().all(|c| c.len() == 2));
        assert_eq!(columns[0].samples, vec![1.0, 2.0]);
    }

    #[test]
    fn cut_to_shortest_on_empty_group_is_a_noop() {
        let mut columns: Vec<Column> = Vec::new();
        cut_to_shortest(&mut columns);
        assert!(columns.is_empty());
    }
}

// src/data_analysis/sequence_ops.rs
