//! Real-input FFT via a half-length complex transform.
//!
//! A real signal of length `N` is viewed as `N/2` complex samples
//! (even samples as real parts, odd samples as imaginary parts), transformed
//! with [`complex_fft`], then split into the true spectrum using the
//! conjugate symmetry of a real signal's transform.
//!
//! # Packed layout
//!
//! The positive-frequency half of the spectrum is stored in the same `N`
//! slots as the input:
//!
//! ```text
//! data[0]        = X[0].re     (DC, purely real)
//! data[1]        = X[N/2].re   (Nyquist, purely real)
//! data[2k], data[2k + 1] = X[k].re, X[k].im   for k = 1..N/2
//! ```
//!
//! The inverse transform consumes the same layout and returns `N/2` times the
//! original signal; multiply by `2/N` to normalise.

use crate::error::{check_fft_size, FourierError, FourierResult};
use crate::fft::{complex_fft, Rotation};
use lib_types::Direction;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Real FFT in place over a buffer of length `N` (power of two, `N >= 2`).
///
/// Forward replaces the signal with its packed half spectrum, inverse
/// replaces a packed half spectrum with `N/2` times its real signal.
pub fn real_fft(data: &mut [f64], direction: Direction) {
    let n = data.len();
    debug_assert!(
        n >= 2 && n.is_power_of_two(),
        "real FFT length must be a power of 2, got {n}"
    );

    let c1 = 0.5;
    let theta = PI / (n >> 1) as f64;
    let (c2, theta) = match direction {
        Direction::Forward => {
            complex_fft(data, Direction::Forward);
            (-0.5, theta)
        }
        Direction::Inverse => (0.5, -theta),
    };

    // Bin 0 and its mirror are folded together below; start the rotation at bin 1.
    let mut w = Rotation::new(theta);
    w.advance();

    // Empty for N = 4.
    for k in 1..(n >> 2) {
        let i1 = 2 * k;
        let i2 = i1 + 1;
        let i3 = n - i1;
        let i4 = i3 + 1;

        let h1r = c1 * (data[i1] + data[i3]);
        let h1i = c1 * (data[i2] - data[i4]);
        let h2r = -c2 * (data[i2] + data[i4]);
        let h2i = c2 * (data[i1] - data[i3]);

        data[i1] = h1r + w.wr * h2r - w.wi * h2i;
        data[i2] = h1i + w.wr * h2i + w.wi * h2r;
        data[i3] = h1r - w.wr * h2r + w.wi * h2i;
        data[i4] = -h1i + w.wr * h2i + w.wi * h2r;

        w.advance();
    }

    let h1r = data[0];
    match direction {
        Direction::Forward => {
            data[0] = h1r + data[1];
            data[1] = h1r - data[1];
        }
        Direction::Inverse => {
            data[0] = c1 * (h1r + data[1]);
            data[1] = c1 * (h1r - data[1]);
            complex_fft(data, Direction::Inverse);
        }
    }
}

/// Expand a packed half spectrum into `N/2 + 1` complex bins.
pub fn unpack_real_spectrum(packed: &[f64]) -> Vec<Complex64> {
    let n = packed.len();
    if n < 2 {
        return packed.iter().map(|&re| Complex64::new(re, 0.0)).collect();
    }

    let mut bins = Vec::with_capacity(n / 2 + 1);
    bins.push(Complex64::new(packed[0], 0.0));
    bins.extend(
        packed[2..]
            .chunks_exact(2)
            .map(|pair| Complex64::new(pair[0], pair[1])),
    );
    bins.push(Complex64::new(packed[1], 0.0));
    bins
}

/// Pack `N/2 + 1` complex bins into the `N`-slot layout used by [`real_fft`].
///
/// Imaginary parts of the DC and Nyquist bins are dropped.
pub fn pack_real_spectrum(spectrum: &[Complex64]) -> FourierResult<Vec<f64>> {
    if spectrum.len() < 2 {
        return Err(FourierError::InsufficientCapacity {
            needed: 2,
            got: spectrum.len(),
        });
    }
    let n = 2 * (spectrum.len() - 1);
    check_fft_size(n)?;

    let mut packed = Vec::with_capacity(n);
    packed.push(spectrum[0].re);
    packed.push(spectrum[n / 2].re);
    for bin in &spectrum[1..n / 2] {
        packed.push(bin.re);
        packed.push(bin.im);
    }
    Ok(packed)
}

/// Forward real FFT, returning `N/2 + 1` complex bins.
///
/// Uses the `exp(+2πi·jk/N)` kernel, like [`complex_fft`].
pub fn rfft(signal: &[f64]) -> FourierResult<Vec<Complex64>> {
    check_fft_size(signal.len())?;

    let mut data = signal.to_vec();
    real_fft(&mut data, Direction::Forward);
    Ok(unpack_real_spectrum(&data))
}

/// Inverse of [`rfft`], normalised so that `irfft(rfft(x)) == x`.
///
/// Input: `output_len / 2 + 1` complex bins.
pub fn irfft(spectrum: &[Complex64], output_len: usize) -> FourierResult<Vec<f64>> {
    check_fft_size(output_len)?;

    let expected_input_len = output_len / 2 + 1;
    if spectrum.len() != expected_input_len {
        return Err(FourierError::LengthMismatch {
            expected: expected_input_len,
            actual: spectrum.len(),
        });
    }

    let mut data = pack_real_spectrum(spectrum)?;
    real_fft(&mut data, Direction::Inverse);

    let scale = 2.0 / output_len as f64;
    for x in data.iter_mut() {
        *x *= scale;
    }

    Ok(data)
}

/// Power spectrum (magnitude squared) of a real signal, `N/2 + 1` bins.
pub fn power_spectrum(signal: &[f64]) -> FourierResult<Vec<f64>> {
    let spectrum = rfft(signal)?;
    Ok(spectrum.iter().map(|c| c.norm_sqr()).collect())
}
