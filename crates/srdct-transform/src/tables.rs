//! Precomputed trigonometric tables
//!
//! Two tables are shared by every 1D transform of one orchestrator:
//!
//! - the rotation table: `[0]` holds the quarter-length `nw` the twiddles were
//!   built for, `[1]` the length `nc` of the cosine table, and from index 2 on
//!   the digit-reversal entries used to permute FFT output
//! - the weight table: twiddle levels in `[0, nw)` followed by the DCT
//!   pre/post rotation cosines in `[nw, nw + nc)`
//!
//! A twiddle level of size `s` sits at offset `nw - 2s` and serves complex
//! FFTs of `4s` points. Each level is derived from the one above it at half
//! the index stride, so construction is linear in `nw`.

use srdct_core::{DctFloat, DctResult};
use tracing::debug;

/// Rotation and weight tables, grown on demand and never shrunk
#[derive(Debug, Clone)]
pub struct TrigTables<T> {
    rotation: Vec<usize>,
    weights: Vec<T>,
}

impl<T: DctFloat> Default for TrigTables<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DctFloat> TrigTables<T> {
    /// Empty tables; the first `ensure_capacity` call builds them
    pub fn new() -> Self {
        Self {
            rotation: vec![0, 0],
            weights: Vec::new(),
        }
    }

    /// Quarter-length the twiddle levels were built for
    pub fn quarter_len(&self) -> usize {
        self.rotation[0]
    }

    /// Length of the DCT cosine table
    pub fn cos_len(&self) -> usize {
        self.rotation[1]
    }

    /// Whether a 1D transform of length `n` can run on the current tables
    pub fn supports(&self, n: usize) -> bool {
        n <= 1 || (n >> 2 <= self.quarter_len() && n <= self.cos_len())
    }

    /// Make the tables cover 1D transforms up to length `n` (a power of two).
    ///
    /// Requests not larger than the built capacity leave the tables untouched.
    /// A larger request rebuilds both tables from scratch.
    pub fn ensure_capacity(&mut self, n: usize) -> DctResult<()> {
        let nw = self.quarter_len().max(n >> 2);
        let nc = self.cos_len().max(n);
        if nw == self.quarter_len() && nc == self.cos_len() {
            return Ok(());
        }

        debug!(
            from_nw = self.quarter_len(),
            from_nc = self.cos_len(),
            nw,
            nc,
            "rebuilding trig tables"
        );

        let mut weights = Vec::new();
        weights.try_reserve_exact(nw + nc)?;
        weights.resize(nw + nc, T::zero());

        let mut rotation = Vec::new();
        rotation.try_reserve_exact(rotation_len(nw))?;
        rotation.resize(rotation_len(nw), 0);

        let (twiddles, cosines) = weights.split_at_mut(nw);
        make_twiddles(nw, &mut rotation, twiddles);
        make_cosines(nc, cosines);
        rotation[0] = nw;
        rotation[1] = nc;

        self.rotation = rotation;
        self.weights = weights;
        Ok(())
    }

    /// Twiddle levels, `[0, nw)` of the weight table
    pub fn twiddles(&self) -> &[T] {
        &self.weights[..self.quarter_len()]
    }

    /// DCT rotation cosines, `[nw, nw + nc)` of the weight table
    pub fn cosines(&self) -> &[T] {
        &self.weights[self.quarter_len()..]
    }

    /// Digit-reversal entries `ip[m + k] = 8 * m * rev(k)`, indexed from 0
    /// like the full rotation table. Only entries from index 2 are meaningful.
    pub fn digit_reversal(&self) -> &[usize] {
        &self.rotation
    }
}

/// Length of the rotation table for quarter-length `nw`
fn rotation_len(nw: usize) -> usize {
    if nw >> 1 <= 4 {
        return 2;
    }
    let mut m = 2;
    let mut l = nw;
    while l > 32 {
        m <<= 1;
        l >>= 2;
    }
    2 * m
}

/// Twiddle levels, built iteratively over levels of halving size
fn make_twiddles<T: DctFloat>(nw: usize, ip: &mut [usize], w: &mut [T]) {
    if nw <= 2 {
        return;
    }

    let mut nwh = nw >> 1;
    let delta = 1.0f64.atan() / nwh as f64;
    let wn4r = (delta * nwh as f64).cos();
    w[0] = T::one();
    w[1] = T::from_f64(wn4r);

    if nwh == 4 {
        w[2] = T::from_f64((delta * 2.0).cos());
        w[3] = T::from_f64((delta * 2.0).sin());
    } else if nwh > 4 {
        make_digit_reversal(nw, ip);
        w[2] = T::from_f64(0.5 / (delta * 2.0).cos());
        w[3] = T::from_f64(0.5 / (delta * 6.0).cos());
        for j in (4..nwh).step_by(4) {
            let angle = delta * j as f64;
            w[j] = T::from_f64(angle.cos());
            w[j + 1] = T::from_f64(angle.sin());
            w[j + 2] = T::from_f64((3.0 * angle).cos());
            w[j + 3] = T::from_f64(-(3.0 * angle).sin());
        }
    }

    let half = T::from_f64(0.5);
    let mut nw0 = 0;
    while nwh > 2 {
        let nw1 = nw0 + nwh;
        nwh >>= 1;
        w[nw1] = T::one();
        w[nw1 + 1] = w[1];
        if nwh == 4 {
            w[nw1 + 2] = w[nw0 + 4];
            w[nw1 + 3] = w[nw0 + 5];
        } else if nwh > 4 {
            w[nw1 + 2] = half / w[nw0 + 4];
            w[nw1 + 3] = half / w[nw0 + 6];
            for j in (4..nwh).step_by(4) {
                let src = nw0 + 2 * j;
                w.copy_within(src..src + 4, nw1 + j);
            }
        }
        nw0 = nw1;
    }
}

/// Digit-reversal table, doubled once per factor of four above 32
fn make_digit_reversal(nw: usize, ip: &mut [usize]) {
    ip[2] = 0;
    ip[3] = 16;
    let mut m = 2;
    let mut l = nw;
    while l > 32 {
        let m2 = m << 1;
        let q = m2 << 3;
        for j in m..m2 {
            let p = ip[j] << 2;
            ip[m + j] = p;
            ip[m2 + j] = p + q;
        }
        m = m2;
        l >>= 2;
    }
}

/// DCT rotation cosines
fn make_cosines<T: DctFloat>(nc: usize, c: &mut [T]) {
    if nc <= 1 {
        return;
    }
    let nch = nc >> 1;
    let delta = 1.0f64.atan() / nch as f64;
    let c0 = (delta * nch as f64).cos();
    c[0] = T::from_f64(c0);
    c[nch] = T::from_f64(0.5 * c0);
    for j in 1..nch {
        let angle = delta * j as f64;
        c[j] = T::from_f64(0.5 * angle.cos());
        c[nc - j] = T::from_f64(0.5 * angle.sin());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};
    use test_log::test;

    #[test]
    fn test_capacity_growth_is_monotonic() {
        let mut tables = TrigTables::<f32>::new();
        assert!(!tables.supports(16));

        tables.ensure_capacity(64).unwrap();
        assert_eq!(tables.quarter_len(), 16);
        assert_eq!(tables.cos_len(), 64);
        assert!(tables.supports(64));
        assert!(tables.supports(2));
        assert!(!tables.supports(128));

        // Smaller requests are no-ops
        let before = tables.cosines().to_vec();
        tables.ensure_capacity(8).unwrap();
        assert_eq!(tables.quarter_len(), 16);
        assert_eq!(tables.cosines(), &before[..]);

        tables.ensure_capacity(1024).unwrap();
        assert_eq!(tables.quarter_len(), 256);
        assert_eq!(tables.cos_len(), 1024);
    }

    #[test]
    fn test_length_two_needs_only_cosines() {
        let mut tables = TrigTables::<f64>::new();
        tables.ensure_capacity(2).unwrap();
        assert_eq!(tables.quarter_len(), 0);
        assert_eq!(tables.cos_len(), 2);
        assert!((tables.cosines()[0] - FRAC_1_SQRT_2).abs() < 1e-15);
        assert!(tables.supports(2));
    }

    #[test]
    fn test_top_level_twiddles() {
        let mut tables = TrigTables::<f64>::new();
        tables.ensure_capacity(256).unwrap();
        let w = tables.twiddles();
        let nwh = 32;
        let delta = PI / 4.0 / nwh as f64;

        assert_eq!(w[0], 1.0);
        assert!((w[1] - FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((w[2] - 0.5 / (2.0 * delta).cos()).abs() < 1e-15);
        assert!((w[3] - 0.5 / (6.0 * delta).cos()).abs() < 1e-15);
        for j in (4..nwh).step_by(4) {
            let angle = delta * j as f64;
            assert!((w[j] - angle.cos()).abs() < 1e-15);
            assert!((w[j + 1] - angle.sin()).abs() < 1e-15);
            assert!((w[j + 2] - (3.0 * angle).cos()).abs() < 1e-15);
            assert!((w[j + 3] + (3.0 * angle).sin()).abs() < 1e-15);
        }
    }

    #[test]
    fn test_lower_levels_double_the_angle() {
        let mut tables = TrigTables::<f64>::new();
        tables.ensure_capacity(512).unwrap();
        let nw = tables.quarter_len();
        let w = tables.twiddles();

        // Level of size s lives at nw - 2s and steps by pi / (4s)
        let mut size = nw >> 2;
        while size > 4 {
            let offset = nw - 2 * size;
            let delta = PI / 4.0 / size as f64;
            assert_eq!(w[offset], 1.0);
            assert!((w[offset + 1] - FRAC_1_SQRT_2).abs() < 1e-15);
            for j in (4..size).step_by(4) {
                assert!((w[offset + j] - (delta * j as f64).cos()).abs() < 1e-14);
                assert!((w[offset + j + 1] - (delta * j as f64).sin()).abs() < 1e-14);
            }
            size >>= 1;
        }
    }

    #[test]
    fn test_digit_reversal_entries() {
        let mut tables = TrigTables::<f32>::new();
        tables.ensure_capacity(4096).unwrap();
        let ip = tables.digit_reversal();

        // ip[m + k] = 8 * m * rev_q(k) for every level m = 2^q that was built
        let mut m = 2;
        let mut q = 1;
        while 2 * m <= ip.len() {
            for k in 0..m {
                let rev = k.reverse_bits() >> (usize::BITS - q);
                assert_eq!(ip[m + k], 8 * m * rev, "m = {m}, k = {k}");
            }
            m <<= 1;
            q += 1;
        }
        assert_eq!(ip.len(), 32);
    }

    #[test]
    fn test_cosine_table() {
        let mut tables = TrigTables::<f64>::new();
        tables.ensure_capacity(32).unwrap();
        let c = tables.cosines();
        let nc = 32;
        let delta = PI / 4.0 / (nc / 2) as f64;

        assert!((c[0] - FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((c[nc / 2] - 0.5 * FRAC_1_SQRT_2).abs() < 1e-15);
        for j in 1..nc / 2 {
            assert!((c[j] - 0.5 * (delta * j as f64).cos()).abs() < 1e-15);
            assert!((c[nc - j] - 0.5 * (delta * j as f64).sin()).abs() < 1e-15);
        }
    }
}
