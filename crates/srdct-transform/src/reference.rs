//! Direct O(n^2) DCT evaluation
//!
//! Straight from the defining sums, in `f64`. Slow, but independent of the
//! FFT path, so it serves as ground truth for tests and benchmarks.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// DCT-II of `input`; with `scale` the result is orthonormal
pub fn dct2_reference(input: &[f64], scale: bool) -> Vec<f64> {
    let n = input.len();
    let mut output = vec![0.0; n];

    for (k, out) in output.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (j, &x) in input.iter().enumerate() {
            sum += x * ((2 * j + 1) as f64 * k as f64 * PI / (2.0 * n as f64)).cos();
        }
        if scale {
            let ck = if k == 0 { FRAC_1_SQRT_2 } else { 1.0 };
            sum *= ck * (2.0 / n as f64).sqrt();
        }
        *out = sum;
    }

    output
}

/// DCT-III of `input`; with `scale` this inverts the scaled DCT-II
pub fn dct3_reference(input: &[f64], scale: bool) -> Vec<f64> {
    let n = input.len();
    let mut output = vec![0.0; n];

    for (k, out) in output.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (j, &x) in input.iter().enumerate() {
            let weight = match (scale, j) {
                (false, _) => 1.0,
                (true, 0) => FRAC_1_SQRT_2 * (2.0 / n as f64).sqrt(),
                (true, _) => (2.0 / n as f64).sqrt(),
            };
            sum += weight * x * (j as f64 * (2 * k + 1) as f64 * PI / (2.0 * n as f64)).cos();
        }
        *out = sum;
    }

    output
}

/// Separable 2-D DCT-II of a row-major `rows x cols` matrix
pub fn dct2_2d_reference(input: &[f64], rows: usize, cols: usize, scale: bool) -> Vec<f64> {
    separable(input, rows, cols, |line| dct2_reference(line, scale))
}

/// Separable 2-D DCT-III of a row-major `rows x cols` matrix
pub fn dct3_2d_reference(input: &[f64], rows: usize, cols: usize, scale: bool) -> Vec<f64> {
    separable(input, rows, cols, |line| dct3_reference(line, scale))
}

fn separable<F>(input: &[f64], rows: usize, cols: usize, transform: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    assert_eq!(input.len(), rows * cols);
    let mut output = input.to_vec();

    for r in 0..rows {
        let row = transform(&output[r * cols..(r + 1) * cols]);
        output[r * cols..(r + 1) * cols].copy_from_slice(&row);
    }

    let mut column = vec![0.0; rows];
    for c in 0..cols {
        for r in 0..rows {
            column[r] = output[r * cols + c];
        }
        let transformed = transform(&column);
        for r in 0..rows {
            output[r * cols + c] = transformed[r];
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_signal_has_only_dc() {
        let input = vec![1.0; 8];
        let output = dct2_reference(&input, false);
        assert!((output[0] - 8.0).abs() < 1e-12);
        for &x in &output[1..] {
            assert!(x.abs() < 1e-12);
        }

        let scaled = dct2_reference(&input, true);
        assert!((scaled[0] - 8.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_scaled_pair_inverts() {
        let input: Vec<f64> = (0..16).map(|i| (i as f64).cos() * 3.0).collect();
        let restored = dct3_reference(&dct2_reference(&input, true), true);
        for (a, b) in input.iter().zip(restored.iter()) {
            assert!((a - b).abs() < 1e-10);
        }
    }

    #[test]
    fn test_2d_ones() {
        let output = dct2_2d_reference(&[1.0; 4], 2, 2, false);
        assert!((output[0] - 4.0).abs() < 1e-12);
        for &x in &output[1..] {
            assert!(x.abs() < 1e-12);
        }

        let restored = dct3_2d_reference(&dct2_2d_reference(&[1.0, 2.0, 3.0, 4.0], 2, 2, true), 2, 2, true);
        for (a, b) in [1.0, 2.0, 3.0, 4.0].iter().zip(restored.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
