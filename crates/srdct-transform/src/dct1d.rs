//! One-dimensional DCT-II / DCT-III of a fixed power-of-two length
//!
//! A length-`n` DCT is folded into an `n / 2` point complex FFT: the forward
//! transform runs a butterfly pre-pass, the real-FFT split step and the FFT,
//! then rotates the result with the cosine table; the inverse runs the same
//! stages backwards.

use srdct_core::{DctError, DctFloat, DctResult, Direction};
use std::f64::consts::FRAC_1_SQRT_2;

use crate::fft::{complex_fft, Kernel};
use crate::tables::TrigTables;

/// DCT engine for one axis
#[derive(Debug, Clone)]
pub struct Dct1d<T> {
    length: usize,
    scale: T,
    dc_scale: T,
}

impl<T: DctFloat> Dct1d<T> {
    pub fn new(length: usize) -> DctResult<Self> {
        if !length.is_power_of_two() {
            return Err(DctError::InvalidParameter(format!(
                "DCT length {length} is not a power of two"
            )));
        }
        Ok(Self {
            length,
            scale: T::from_f64((2.0 / length as f64).sqrt()),
            dc_scale: T::from_f64(FRAC_1_SQRT_2),
        })
    }

    /// Returns the length of the transform
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn apply(&self, direction: Direction, tables: &TrigTables<T>, data: &mut [T], scale: bool) {
        match direction {
            Direction::Forward => self.forward(tables, data, scale),
            Direction::Inverse => self.inverse(tables, data, scale),
        }
    }

    /// In-place DCT-II: `X[k] = sum x[j] cos(pi (j + 1/2) k / n)`.
    ///
    /// With `scale` the output is multiplied by `sqrt(2 / n)` and `X[0]`
    /// additionally by `1 / sqrt(2)`, making the transform orthonormal.
    pub fn forward(&self, tables: &TrigTables<T>, data: &mut [T], scale: bool) {
        let n = self.length;
        assert_eq!(data.len(), n, "DCT of length {n} applied to {} samples", data.len());
        if n == 1 {
            return;
        }
        assert!(tables.supports(n), "trig tables too small for length {n}");

        let a = data;
        let xr = a[n - 1];
        for j in (2..n - 1).rev().step_by(2) {
            a[j + 1] = a[j] - a[j - 1];
            a[j] = a[j] + a[j - 1];
        }
        a[1] = a[0] - xr;
        a[0] = a[0] + xr;

        if n > 4 {
            split_backward(a, tables.cosines());
        }
        if n >= 4 {
            complex_fft(a, tables, Kernel::Negative);
        }
        rotate(a, tables.cosines());

        if scale {
            self.normalize(a);
        }
    }

    /// In-place DCT-III: `x[k] = sum X[j] cos(pi j (k + 1/2) / n)`.
    ///
    /// With `scale` the input is first weighted like the scaled forward
    /// output, so the scaled pair is an exact inverse.
    pub fn inverse(&self, tables: &TrigTables<T>, data: &mut [T], scale: bool) {
        let n = self.length;
        assert_eq!(data.len(), n, "DCT of length {n} applied to {} samples", data.len());
        if n == 1 {
            return;
        }
        assert!(tables.supports(n), "trig tables too small for length {n}");

        let a = data;
        if scale {
            self.normalize(a);
        }

        rotate(a, tables.cosines());
        if n >= 4 {
            complex_fft(a, tables, Kernel::Positive);
        }
        if n > 4 {
            split_forward(a, tables.cosines());
        }

        let xr = a[0] - a[1];
        a[0] = a[0] + a[1];
        for j in (2..n).step_by(2) {
            a[j - 1] = a[j] - a[j + 1];
            a[j] = a[j] + a[j + 1];
        }
        a[n - 1] = xr;
    }

    fn normalize(&self, a: &mut [T]) {
        for x in a.iter_mut() {
            *x = *x * self.scale;
        }
        a[0] = a[0] * self.dc_scale;
    }
}

/// Pre/post rotation shared by both directions
fn rotate<T: DctFloat>(a: &mut [T], c: &[T]) {
    let n = a.len();
    let nc = c.len();
    let m = n >> 1;
    let ks = nc / n;
    let mut kk = 0;
    for j in 1..m {
        let k = n - j;
        kk += ks;
        let wkr = c[kk] - c[nc - kk];
        let wki = c[kk] + c[nc - kk];
        let xr = wki * a[j] - wkr * a[k];
        a[j] = wkr * a[j] + wki * a[k];
        a[k] = xr;
    }
    a[m] = a[m] * c[0];
}

/// Real-FFT split step run after the `e^(+i)` FFT
fn split_forward<T: DctFloat>(a: &mut [T], c: &[T]) {
    let n = a.len();
    let nc = c.len();
    let m = n >> 1;
    let ks = 2 * nc / m;
    let half = T::from_f64(0.5);
    let mut kk = 0;
    for j in (2..m).step_by(2) {
        let k = n - j;
        kk += ks;
        let wkr = half - c[nc - kk];
        let wki = c[kk];
        let xr = a[j] - a[k];
        let xi = a[j + 1] + a[k + 1];
        let yr = wkr * xr - wki * xi;
        let yi = wkr * xi + wki * xr;
        a[j] = a[j] - yr;
        a[j + 1] = a[j + 1] - yi;
        a[k] = a[k] + yr;
        a[k + 1] = a[k + 1] - yi;
    }
}

/// Real-FFT split step run before the `e^(-i)` FFT
fn split_backward<T: DctFloat>(a: &mut [T], c: &[T]) {
    let n = a.len();
    let nc = c.len();
    let m = n >> 1;
    let ks = 2 * nc / m;
    let half = T::from_f64(0.5);
    let mut kk = 0;
    for j in (2..m).step_by(2) {
        let k = n - j;
        kk += ks;
        let wkr = half - c[nc - kk];
        let wki = c[kk];
        let xr = a[j] - a[k];
        let xi = a[j + 1] + a[k + 1];
        let yr = wkr * xr + wki * xi;
        let yi = wkr * xi - wki * xr;
        a[j] = a[j] - yr;
        a[j + 1] = a[j + 1] - yi;
        a[k] = a[k] + yr;
        a[k + 1] = a[k + 1] - yi;
    }
}
