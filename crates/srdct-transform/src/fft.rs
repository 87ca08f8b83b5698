//! Split-radix complex FFT over the shared twiddle levels
//!
//! Data is interleaved `re, im` pairs. The decimation-in-frequency recursion
//! leaves its output in bit-reversed order, which the digit-reversal table
//! then undoes.

use srdct_core::DctFloat;

use crate::tables::TrigTables;

/// Sign of the exponent in the FFT kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kernel {
    /// `X[k] = sum x[j] e^(-2 pi i jk / N)`
    Negative,
    /// `X[k] = sum x[j] e^(+2 pi i jk / N)`
    Positive,
}

/// In-place FFT of the `a.len() / 2` complex points in `a`
pub(crate) fn complex_fft<T: DctFloat>(a: &mut [T], tables: &TrigTables<T>, kernel: Kernel) {
    split_radix(a, tables.twiddles(), kernel);
    bit_reverse(a, tables.digit_reversal());
}

fn split_radix<T: DctFloat>(a: &mut [T], w: &[T], kernel: Kernel) {
    let points = a.len() / 2;
    if points < 2 {
        return;
    }
    if points == 2 {
        let (x0r, x0i, x1r, x1i) = (a[0], a[1], a[2], a[3]);
        a[0] = x0r + x1r;
        a[1] = x0i + x1i;
        a[2] = x0r - x1r;
        a[3] = x0i - x1i;
        return;
    }

    // Even outputs come from x[j] + x[j + N/2]; outputs 4k+1 and 4k+3 from the
    // rotated differences, each scaled by its own twiddle.
    let quarter = points / 4;
    let stride = 2 * quarter;
    for j in 0..quarter {
        let i0 = 2 * j;
        let i1 = i0 + stride;
        let i2 = i1 + stride;
        let i3 = i2 + stride;
        let [c1, s1, c3, s3] = twiddle(w, points, j);

        let d02r = a[i0] - a[i2];
        let d02i = a[i0 + 1] - a[i2 + 1];
        let d13r = a[i1] - a[i3];
        let d13i = a[i1 + 1] - a[i3 + 1];
        a[i0] = a[i0] + a[i2];
        a[i0 + 1] = a[i0 + 1] + a[i2 + 1];
        a[i1] = a[i1] + a[i3];
        a[i1 + 1] = a[i1 + 1] + a[i3 + 1];

        match kernel {
            Kernel::Negative => {
                let (ur, ui) = (d02r + d13i, d02i - d13r);
                let (vr, vi) = (d02r - d13i, d02i + d13r);
                a[i2] = ur * c1 + ui * s1;
                a[i2 + 1] = ui * c1 - ur * s1;
                a[i3] = vr * c3 + vi * s3;
                a[i3 + 1] = vi * c3 - vr * s3;
            }
            Kernel::Positive => {
                let (ur, ui) = (d02r - d13i, d02i + d13r);
                let (vr, vi) = (d02r + d13i, d02i - d13r);
                a[i2] = ur * c1 - ui * s1;
                a[i2 + 1] = ui * c1 + ur * s1;
                a[i3] = vr * c3 - vi * s3;
                a[i3 + 1] = vi * c3 + vr * s3;
            }
        }
    }

    let (half, rest) = a.split_at_mut(points);
    split_radix(half, w, kernel);
    let (third, fourth) = rest.split_at_mut(stride);
    split_radix(third, w, kernel);
    split_radix(fourth, w, kernel);
}

/// `[cos t, sin t, cos 3t, sin 3t]` for `t = 2 pi j / points`, `j < points / 4`
#[inline]
fn twiddle<T: DctFloat>(w: &[T], points: usize, j: usize) -> [T; 4] {
    if j > points / 8 {
        // t = pi/2 - t'
        let [c1, s1, c3, s3] = first_octant(w, points, points / 4 - j);
        [s1, c1, -s3, -c3]
    } else {
        first_octant(w, points, j)
    }
}

/// Twiddles for `j <= points / 8`, read from the level of size `points / 4`
fn first_octant<T: DctFloat>(w: &[T], points: usize, j: usize) -> [T; 4] {
    if j == 0 {
        return [T::one(), T::zero(), T::one(), T::zero()];
    }

    let offset = w.len() - points / 2;
    if j == points / 8 {
        let r = w[offset + 1];
        return [r, r, -r, r];
    }
    if points == 16 {
        // Level of size 4 stores cos and sin of pi/8 directly
        let (c, s) = (w[offset + 2], w[offset + 3]);
        return [c, s, s, c];
    }
    if j % 2 == 0 {
        let k = offset + 2 * j;
        return [w[k], w[k + 1], w[k + 2], -w[k + 3]];
    }

    // Odd steps fall between two stored angles: cos((a + b) / 2) equals
    // (cos a + cos b) / (2 cos((b - a) / 2)), and the level keeps the
    // 1 / (2 cos) factors for t and 3t at offsets 2 and 3.
    let lo = first_octant(w, points, j - 1);
    let hi = first_octant(w, points, j + 1);
    let (csc1, csc3) = (w[offset + 2], w[offset + 3]);
    [
        (lo[0] + hi[0]) * csc1,
        (lo[1] + hi[1]) * csc1,
        (lo[2] + hi[2]) * csc3,
        (lo[3] + hi[3]) * csc3,
    ]
}

/// Permute bit-reversed FFT output back into natural order
fn bit_reverse<T: DctFloat>(a: &mut [T], ip: &[usize]) {
    let points = a.len() / 2;
    if points <= 2 {
        return;
    }
    let bits = points.trailing_zeros();
    for i in 0..points {
        let j = reverse_index(i, bits, ip);
        if i < j {
            a.swap(2 * i, 2 * j);
            a.swap(2 * i + 1, 2 * j + 1);
        }
    }
}

/// Reverse the low `bits` bits of `index`, `q` bits at a time through the
/// widest digit-reversal level `ip[m..2m]` with `m = 2^q`
fn reverse_index(index: usize, bits: u32, ip: &[usize]) -> usize {
    let m = ip.len() / 2;
    if m < 2 {
        return index.reverse_bits() >> (usize::BITS - bits);
    }

    let q = m.trailing_zeros();
    let shift = q + 3;
    let mut rest = index;
    let mut left = bits;
    let mut reversed = 0;
    while left >= q {
        reversed = (reversed << q) | (ip[m + (rest & (m - 1))] >> shift);
        rest >>= q;
        left -= q;
    }
    if left > 0 {
        reversed = (reversed << left) | ((ip[m + rest] >> shift) >> (q - left));
    }
    reversed
}
