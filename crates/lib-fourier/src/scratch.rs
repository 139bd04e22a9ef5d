//! Scoped scratch storage.
//!
//! The convolution engine needs one private spectrum buffer of `2N` doubles
//! per call. [`ScratchBuffer`] owns it for exactly the duration of that call:
//! it is acquired on entry and released in `Drop`, so an early `?` return
//! releases it as well.

use std::ops::{Deref, DerefMut};

#[cfg(test)]
thread_local! {
    static LIVE: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Zero-initialised buffer of doubles released on scope exit.
pub struct ScratchBuffer {
    buf: Vec<f64>,
}

impl ScratchBuffer {
    /// Acquire a zeroed buffer of `len` doubles.
    pub fn acquire(len: usize) -> Self {
        tracing::trace!(len, "acquired scratch buffer");

        #[cfg(test)]
        LIVE.with(|live| live.set(live.get() + 1));

        Self { buf: vec![0.0; len] }
    }
}

impl Deref for ScratchBuffer {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.buf
    }
}

impl DerefMut for ScratchBuffer {
    fn deref_mut(&mut self) -> &mut [f64] {
        &mut self.buf
    }
}

impl Drop for ScratchBuffer {
    fn drop(&mut self) {
        tracing::trace!(len = self.buf.len(), "released scratch buffer");

        #[cfg(test)]
        LIVE.with(|live| live.set(live.get() - 1));
    }
}

/// Scratch buffers currently alive on this thread.
#[cfg(test)]
pub(crate) fn live_buffers() -> usize {
    LIVE.with(|live| live.get())
}
