//! Circular convolution and deconvolution by spectral multiplication.
//!
//! # Wrap-around responses
//!
//! A response of odd length `M` is stored in wrap-around order: lag 0 first,
//! then positive lags `1..=(M-1)/2`, then negative lags counting back from
//! the end:
//!
//! ```text
//! [r(0), r(1), ..., r(h), r(-h), ..., r(-1)]     h = (M - 1) / 2
//! ```
//!
//! [`convolve`] expands this in place to a zero-padded window of length `N`
//! (negative lags moved to the end of the window), transforms data and
//! response together with [`dual_real_fft`], multiplies or divides the
//! spectra bin by bin and returns to the time domain with [`real_fft`].

use crate::dual::dual_real_fft;
use crate::error::{check_fft_size, FourierError, FourierResult};
use crate::real::real_fft;
use crate::scratch::ScratchBuffer;
use lib_types::{ConvolutionConfig, ConvolutionMode, Direction};

/// Parse an integer mode flag (`+1` convolve, `-1` deconvolve).
pub fn parse_mode(isign: i32) -> FourierResult<ConvolutionMode> {
    ConvolutionMode::from_isign(isign).ok_or(FourierError::InvalidMode(isign))
}

/// Convolve or deconvolve `data` with a wrap-around `response`.
///
/// # Arguments
///
/// * `data` - Signal of length `N` (power of two), including any zero padding
/// * `response` - First `m` slots hold the response in wrap-around order;
///   needs at least `N` slots and is overwritten with the padded window
/// * `m` - Response length, odd and at most `N`
/// * `mode` - Multiply or divide the spectra
/// * `ans` - Needs at least `2N` slots; the result is in `ans[..N]`, the
///   remaining slots are working space
///
/// # Errors
///
/// [`FourierError::SingularResponse`] when deconvolving at a bin where the
/// response spectrum is exactly zero; `ans` is then left with partial
/// spectral data. Shape errors are reported before anything is modified.
pub fn convolve(
    data: &[f64],
    response: &mut [f64],
    m: usize,
    mode: ConvolutionMode,
    ans: &mut [f64],
) -> FourierResult<()> {
    let n = data.len();
    check_fft_size(n)?;
    check_response_len(m, n)?;
    if response.len() < n {
        return Err(FourierError::InsufficientCapacity {
            needed: n,
            got: response.len(),
        });
    }
    if ans.len() < 2 * n {
        return Err(FourierError::InsufficientCapacity {
            needed: 2 * n,
            got: ans.len(),
        });
    }

    tracing::debug!(n, m, ?mode, "convolution");

    let response = &mut response[..n];
    wrap_to_window(response, m);

    let mut fft = ScratchBuffer::acquire(2 * n);
    dual_real_fft(data, response, &mut fft, ans);

    let no2 = (n >> 1) as f64;
    for bin in 0..=n / 2 {
        let re = 2 * bin;
        let im = re + 1;
        let (hr, hi) = (ans[re], ans[im]);

        match mode {
            ConvolutionMode::Convolve => {
                ans[re] = (fft[re] * hr - fft[im] * hi) / no2;
                ans[im] = (fft[im] * hr + fft[re] * hi) / no2;
            }
            ConvolutionMode::Deconvolve => {
                let mag2 = hr * hr + hi * hi;
                if mag2 == 0.0 {
                    tracing::warn!(bin, "deconvolution at response zero");
                    return Err(FourierError::SingularResponse { bin });
                }
                ans[re] = (fft[re] * hr + fft[im] * hi) / mag2 / no2;
                ans[im] = (fft[im] * hr - fft[re] * hi) / mag2 / no2;
            }
        }
    }

    // Nyquist bin goes into slot 1 for the packed inverse.
    ans[1] = ans[n];
    real_fft(&mut ans[..n], Direction::Inverse);

    Ok(())
}

/// [`convolve`] with an integer mode flag.
///
/// Any flag other than `+1` / `-1` is [`FourierError::InvalidMode`].
pub fn convolve_isign(
    data: &[f64],
    response: &mut [f64],
    m: usize,
    isign: i32,
    ans: &mut [f64],
) -> FourierResult<()> {
    let mode = parse_mode(isign)?;
    convolve(data, response, m, mode, ans)
}

fn check_response_len(m: usize, n: usize) -> FourierResult<()> {
    if m % 2 == 0 {
        return Err(FourierError::EvenResponseLength(m));
    }
    if m > n {
        return Err(FourierError::ResponseTooLong {
            response: m,
            signal: n,
        });
    }
    Ok(())
}

/// Expand an `m`-tap wrap-around response in place to the full window.
///
/// Negative lags move to the tail of `window`; everything between the
/// positive and negative lags is zeroed.
fn wrap_to_window(window: &mut [f64], m: usize) {
    let n = window.len();
    let half = (m - 1) / 2;

    window.copy_within(m - half..m, n - half);
    window[(m + 1) / 2..n - half].fill(0.0);
}

/// Convert a centred odd-length response to wrap-around order.
///
/// `taps[(M-1)/2]` is lag 0.
pub fn wrap_response(taps: &[f64]) -> FourierResult<Vec<f64>> {
    let m = taps.len();
    if m % 2 == 0 {
        return Err(FourierError::EvenResponseLength(m));
    }

    let half = (m - 1) / 2;
    let mut wrapped = Vec::with_capacity(m);
    wrapped.extend_from_slice(&taps[half..]);
    wrapped.extend_from_slice(&taps[..half]);
    Ok(wrapped)
}

/// Direct circular convolution with a wrap-around response.
///
/// This is O(N·M) and intended for validation.
pub fn direct_circular_convolve(data: &[f64], response: &[f64]) -> Vec<f64> {
    let n = data.len();
    let m = response.len();
    let half = m.saturating_sub(1) / 2;

    let mut output = vec![0.0; n];
    for (r, &tap) in response.iter().enumerate() {
        // Lag `r` for the head, `r - m` for the tail, taken mod N.
        let shift = if r <= half { r % n } else { (n - (m - r) % n) % n };
        for (i, out) in output.iter_mut().enumerate() {
            *out += tap * data[(i + n - shift) % n];
        }
    }
    output
}

/// Fixed-length convolution engine over owned buffers.
///
/// Takes compact wrap-around responses and never mutates its inputs.
#[derive(Clone, Debug)]
pub struct ConvolutionEngine {
    /// Signal length (power of 2).
    len: usize,

    /// Mode used by [`ConvolutionEngine::apply`].
    mode: ConvolutionMode,
}

impl ConvolutionEngine {
    /// Create an engine for signals of length `len`.
    pub fn new(len: usize) -> FourierResult<Self> {
        Self::from_config(&ConvolutionConfig::new(len, ConvolutionMode::default()))
    }

    /// Create an engine from a configuration.
    pub fn from_config(config: &ConvolutionConfig) -> FourierResult<Self> {
        check_fft_size(config.len)?;

        tracing::debug!(
            "ConvolutionEngine: len={}, mode={:?}",
            config.len,
            config.mode
        );

        Ok(Self {
            len: config.len,
            mode: config.mode,
        })
    }

    /// Signal length this engine was built for.
    pub fn signal_len(&self) -> usize {
        self.len
    }

    /// Configured mode.
    pub fn mode(&self) -> ConvolutionMode {
        self.mode
    }

    /// Run the configured mode.
    pub fn apply(&self, data: &[f64], response: &[f64]) -> FourierResult<Vec<f64>> {
        self.run(data, response, self.mode)
    }

    /// Circular convolution of `data` with a wrap-around `response`.
    pub fn convolve(&self, data: &[f64], response: &[f64]) -> FourierResult<Vec<f64>> {
        self.run(data, response, ConvolutionMode::Convolve)
    }

    /// Undo a circular convolution with the same wrap-around `response`.
    pub fn deconvolve(&self, data: &[f64], response: &[f64]) -> FourierResult<Vec<f64>> {
        self.run(data, response, ConvolutionMode::Deconvolve)
    }

    fn run(
        &self,
        data: &[f64],
        response: &[f64],
        mode: ConvolutionMode,
    ) -> FourierResult<Vec<f64>> {
        let n = self.len;
        if data.len() != n {
            return Err(FourierError::LengthMismatch {
                expected: n,
                actual: data.len(),
            });
        }
        let m = response.len();
        check_response_len(m, n)?;

        let mut window = vec![0.0; n];
        window[..m].copy_from_slice(response);

        let mut ans = vec![0.0; 2 * n];
        convolve(data, &mut window, m, mode, &mut ans)?;

        ans.truncate(n);
        Ok(ans)
    }
}
