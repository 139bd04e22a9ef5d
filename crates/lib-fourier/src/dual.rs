//! Two real FFTs for the price of one complex FFT.
//!
//! Packing signal `a` into the real parts and signal `b` into the imaginary
//! parts gives `Z = A + i·B`. Since both `A` and `B` are Hermitian,
//!
//! ```text
//! A[k] = (Z[k] + conj Z[N-k]) / 2
//! B[k] = (Z[k] - conj Z[N-k]) / 2i
//! ```
//!
//! so one forward transform of length `N` yields both spectra.

use crate::fft::complex_fft;
use lib_types::Direction;

/// Forward transforms of two real signals of length `N` (power of two).
///
/// On return the first `2N` slots of `fft1` and `fft2` hold the full
/// interleaved complex spectra of `data1` and `data2`, identical to running
/// [`complex_fft`] forward on each signal with zero imaginary parts. Slots
/// past `2N` are left untouched.
pub fn dual_real_fft(data1: &[f64], data2: &[f64], fft1: &mut [f64], fft2: &mut [f64]) {
    let n = data1.len();
    debug_assert_eq!(data2.len(), n, "dual real FFT inputs must have equal length");
    debug_assert!(
        fft1.len() >= 2 * n && fft2.len() >= 2 * n,
        "dual real FFT outputs need 2N slots"
    );

    let fft1 = &mut fft1[..2 * n];
    let fft2 = &mut fft2[..2 * n];

    for (pair, (&a, &b)) in fft1.chunks_exact_mut(2).zip(data1.iter().zip(data2)) {
        pair[0] = a;
        pair[1] = b;
    }

    complex_fft(fft1, Direction::Forward);

    // DC: both components are real.
    fft2[0] = fft1[1];
    fft1[1] = 0.0;
    fft2[1] = 0.0;

    let nn2 = 2 * n;
    for k in 1..=n / 2 {
        let j = 2 * k;
        let jm = nn2 - j;

        let rep = 0.5 * (fft1[j] + fft1[jm]);
        let rem = 0.5 * (fft1[j] - fft1[jm]);
        let aip = 0.5 * (fft1[j + 1] + fft1[jm + 1]);
        let aim = 0.5 * (fft1[j + 1] - fft1[jm + 1]);

        fft1[j] = rep;
        fft1[j + 1] = aim;
        fft1[jm] = rep;
        fft1[jm + 1] = -aim;

        fft2[j] = aip;
        fft2[j + 1] = -rem;
        fft2[jm] = aip;
        fft2[jm + 1] = rem;
    }
}
