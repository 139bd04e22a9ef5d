//! In-place radix-2 complex FFT.
//!
//! The kernel works on an interleaved buffer `[re0, im0, re1, im1, ...]` of
//! length `2N`, `N` a power of two. It performs a bit-reversal permutation
//! followed by the Danielson-Lanczos butterflies, with rotation factors
//! generated by the angle-addition recurrence instead of a sine/cosine call
//! per butterfly.
//!
//! Sign convention: [`Direction::Forward`] computes
//! `X[k] = Σ x[j]·exp(+2πi·jk/N)`, [`Direction::Inverse`] the same sum with
//! the opposite exponent. The inverse is not normalised, so a forward/inverse
//! pair scales the signal by `N`.

use crate::error::{FourierError, FourierResult};
use lib_types::Direction;
use num_complex::Complex64;
use std::f64::consts::TAU;

/// Truncated 2π. Rotation seeds are derived from this exact value, not `TAU`.
#[allow(clippy::approx_constant, clippy::excessive_precision)]
const TWO_PI: f64 = 6.28318530717959;

/// Rotation factor `w = wr + i·wi`, advanced by a fixed angle θ per step.
///
/// `wpr = -2·sin²(θ/2)` and `wpi = sin θ`, so one step is
/// `w ← w + w·(wpr + i·wpi)` without evaluating any trigonometric function.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rotation {
    pub wr: f64,
    pub wi: f64,
    wpr: f64,
    wpi: f64,
}

impl Rotation {
    /// Start at `w = 1` with step angle `theta`.
    pub fn new(theta: f64) -> Self {
        let wtemp = (0.5 * theta).sin();
        Self {
            wr: 1.0,
            wi: 0.0,
            wpr: -2.0 * wtemp * wtemp,
            wpi: theta.sin(),
        }
    }

    /// Advance by one step angle.
    #[inline]
    pub fn advance(&mut self) {
        let wtemp = self.wr;
        self.wr = wtemp * self.wpr - self.wi * self.wpi + wtemp;
        self.wi = self.wi * self.wpr + wtemp * self.wpi + self.wi;
    }
}

/// Transform an interleaved complex buffer in place.
///
/// `data.len()` must be `2N` with `N` a power of two. This is not validated
/// in release builds; other lengths give meaningless output.
pub fn complex_fft(data: &mut [f64], direction: Direction) {
    let n = data.len();
    debug_assert!(
        n >= 2 && (n / 2).is_power_of_two() && n % 2 == 0,
        "complex FFT buffer length must be 2N with N a power of 2, got {n}"
    );

    bit_reverse(data);

    // Danielson-Lanczos: merge transforms of length mmax/2 into mmax.
    let mut mmax = 2;
    while n > mmax {
        let istep = mmax << 1;
        let theta = direction.sign() * (TWO_PI / mmax as f64);
        let mut w = Rotation::new(theta);

        for m in (0..mmax).step_by(2) {
            for i in (m..n).step_by(istep) {
                let j = i + mmax;
                let tempr = w.wr * data[j] - w.wi * data[j + 1];
                let tempi = w.wr * data[j + 1] + w.wi * data[j];
                data[j] = data[i] - tempr;
                data[j + 1] = data[i + 1] - tempi;
                data[i] += tempr;
                data[i + 1] += tempi;
            }
            w.advance();
        }
        mmax = istep;
    }
}

/// Reorder complex samples into bit-reversed index order.
///
/// `j` walks the bit-reversed counterpart of `i`; a pair is swapped only
/// from the lower index so nothing is swapped twice.
fn bit_reverse(data: &mut [f64]) {
    let n = data.len();
    let mut j = 0;
    for i in (0..n).step_by(2) {
        if j > i {
            data.swap(j, i);
            data.swap(j + 1, i + 1);
        }
        let mut m = n >> 1;
        while m >= 2 && j >= m {
            j -= m;
            m >>= 1;
        }
        j += m;
    }
}

/// Flatten complex samples into an interleaved `[re, im, ...]` buffer.
pub fn interleave(samples: &[Complex64]) -> Vec<f64> {
    samples.iter().flat_map(|c| [c.re, c.im]).collect()
}

/// Inverse of [`interleave`]. A trailing odd element is ignored.
pub fn deinterleave(data: &[f64]) -> Vec<Complex64> {
    data.chunks_exact(2)
        .map(|pair| Complex64::new(pair[0], pair[1]))
        .collect()
}

/// Forward transform of complex samples, returning a new buffer.
pub fn fft(samples: &[Complex64]) -> FourierResult<Vec<Complex64>> {
    transform(samples, Direction::Forward)
}

/// Inverse transform of complex samples, normalised by `1/N`.
pub fn ifft(spectrum: &[Complex64]) -> FourierResult<Vec<Complex64>> {
    let mut result = transform(spectrum, Direction::Inverse)?;

    let scale = 1.0 / result.len() as f64;
    for x in result.iter_mut() {
        *x *= scale;
    }

    Ok(result)
}

fn transform(samples: &[Complex64], direction: Direction) -> FourierResult<Vec<Complex64>> {
    let len = samples.len();
    if !len.is_power_of_two() {
        return Err(FourierError::InvalidFftSize(len));
    }

    let mut data = interleave(samples);
    complex_fft(&mut data, direction);
    Ok(deinterleave(&data))
}

/// Direct O(N²) DFT with the same sign convention as [`complex_fft`].
///
/// Intended for validation of short transforms.
pub fn direct_dft(samples: &[Complex64], direction: Direction) -> Vec<Complex64> {
    let n = samples.len();
    (0..n)
        .map(|k| {
            samples
                .iter()
                .enumerate()
                .map(|(j, &x)| {
                    // Reduce jk mod N before scaling to keep the angle small.
                    let angle = direction.sign() * TAU * ((j * k) % n) as f64 / n as f64;
                    x * Complex64::from_polar(1.0, angle)
                })
                .sum()
        })
        .collect()
}
