//! Convolution engine configuration.

use crate::direction::ConvolutionMode;
use serde::{Deserialize, Serialize};

/// Configuration for a fixed-length convolution engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvolutionConfig {
    /// Signal length N (must be a power of two).
    #[serde(default = "default_len")]
    pub len: usize,

    /// Default mode used by `ConvolutionEngine::apply`.
    #[serde(default)]
    pub mode: ConvolutionMode,
}

impl Default for ConvolutionConfig {
    fn default() -> Self {
        Self {
            len: default_len(),
            mode: ConvolutionMode::default(),
        }
    }
}

impl ConvolutionConfig {
    pub fn new(len: usize, mode: ConvolutionMode) -> Self {
        Self { len, mode }
    }
}

fn default_len() -> usize { 1024 }
