//! # lib-fourier
//!
//! Radix-2 Cooley-Tukey FFT kernel and the routines built on it:
//!
//! - **Complex FFT**: in-place transform of an interleaved `[re, im, ...]` buffer
//! - **Real FFT**: real input through a half-length complex transform, packed output
//! - **Dual real FFT**: two real signals through one complex transform
//! - **Convolution**: circular convolution/deconvolution with wrap-around responses
//!
//! All transforms work in place on caller-owned `f64` slices whose lengths
//! are powers of two. Only the convolution engine can fail.

pub mod error;
pub mod fft;
pub mod real;
pub mod dual;
pub mod scratch;
pub mod convolution;

pub use error::{FourierError, FourierResult};
pub use fft::complex_fft;
pub use real::real_fft;
pub use dual::dual_real_fft;
pub use convolution::{convolve, ConvolutionEngine};
pub use lib_types::{ConvolutionConfig, ConvolutionMode, Direction};
