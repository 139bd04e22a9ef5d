//! # lib-types
//!
//! Plain type definitions shared by the lib-fourier workspace:
//! - Transform direction and convolution mode flags
//! - Convolution engine configuration

pub mod direction;
pub mod config;

pub use direction::*;
pub use config::*;
