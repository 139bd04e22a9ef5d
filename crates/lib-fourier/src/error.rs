//! Error types for the convolution engine and the owned transform wrappers.
//!
//! The in-place transforms themselves have no failure mode.

use thiserror::Error;

/// Errors that can occur during Fourier operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FourierError {
    /// Deconvolution hit a frequency bin where the response spectrum is exactly zero.
    #[error("deconvolution at response zero (bin {bin})")]
    SingularResponse { bin: usize },

    /// Integer mode flag other than +1 / -1.
    #[error("no meaning for isign {0}")]
    InvalidMode(i32),

    /// Transform size is not a power of 2.
    #[error("FFT size must be a power of 2 and at least 2, got {0}")]
    InvalidFftSize(usize),

    /// Response length must be odd for wrap-around storage.
    #[error("response length must be odd, got {0}")]
    EvenResponseLength(usize),

    /// Response has more taps than the signal window.
    #[error("response length {response} exceeds signal length {signal}")]
    ResponseTooLong { response: usize, signal: usize },

    /// Input length mismatch.
    #[error("input length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A caller-provided buffer is too small.
    #[error("buffer too small: need at least {needed}, got {got}")]
    InsufficientCapacity { needed: usize, got: usize },
}

/// Result type for Fourier operations.
pub type FourierResult<T> = Result<T, FourierError>;

/// Check that `len` is a usable transform length.
pub(crate) fn check_fft_size(len: usize) -> FourierResult<()> {
    if len < 2 || !len.is_power_of_two() {
        return Err(FourierError::InvalidFftSize(len));
    }
    Ok(())
}
