//! Per-call sign flags for transforms and convolution.
//!
//! Neither flag is ever stored inside an engine: every transform takes the
//! direction it should run in, every convolution call takes its mode.
//!
//! Both flags also have an integer form (`+1` / `-1`). The integer form is
//! what the sign of the transform exponent is computed from, and what older
//! call sites pass around.

use serde::{Deserialize, Serialize};

/// Direction of a Fourier transform.
///
/// `Forward` uses the kernel `exp(+2πi·jk/N)`, `Inverse` uses
/// `exp(-2πi·jk/N)`. The inverse is unnormalised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}

impl Direction {
    /// Integer sign of the transform exponent (`+1` forward, `-1` inverse).
    #[inline]
    pub fn isign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Inverse => -1,
        }
    }

    /// Sign of the transform exponent as a float.
    #[inline]
    pub fn sign(self) -> f64 {
        f64::from(self.isign())
    }

    /// Parse an integer sign flag. Only `+1` and `-1` have a meaning.
    pub fn from_isign(isign: i32) -> Option<Self> {
        match isign {
            1 => Some(Direction::Forward),
            -1 => Some(Direction::Inverse),
            _ => None,
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Inverse,
            Direction::Inverse => Direction::Forward,
        }
    }
}

/// What the convolution engine does with the two spectra.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvolutionMode {
    /// Multiply spectra.
    #[default]
    Convolve,

    /// Divide the data spectrum by the response spectrum.
    Deconvolve,
}

impl ConvolutionMode {
    /// Integer flag (`+1` convolve, `-1` deconvolve).
    #[inline]
    pub fn isign(self) -> i32 {
        match self {
            ConvolutionMode::Convolve => 1,
            ConvolutionMode::Deconvolve => -1,
        }
    }

    /// Parse an integer mode flag. Only `+1` and `-1` have a meaning.
    pub fn from_isign(isign: i32) -> Option<Self> {
        match isign {
            1 => Some(ConvolutionMode::Convolve),
            -1 => Some(ConvolutionMode::Deconvolve),
            _ => None,
        }
    }
}
