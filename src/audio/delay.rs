use heapless::Vec;

use crate::error::{Error, Param};

/// A circular delay line for a single channel.
///
/// The actual storage might live in some special RAM, which means we do this
/// as a trait that will be fulfilled in the implementation. The storage only
/// has to hand out samples by index, the fractional read is shared.
pub trait Delay: Sized {
    /// Create a zero filled delay holding `len` samples.
    fn with_len(len: usize) -> Result<Self, Error>;

    /// Number of samples held. Always > 0.
    fn len(&self) -> usize;

    /// Sample at an absolute index in `[0, len)`.
    fn sample(&self, index: usize) -> f32;

    /// Current write cursor in `[0, len)`.
    fn write_index(&self) -> usize;

    /// Store a sample at the write cursor. The cursor stays put.
    fn write(&mut self, v: f32);

    /// Move the write cursor one step, wrapping at `len`.
    fn advance(&mut self);

    /// Zero all samples and rewind the write cursor.
    fn clear(&mut self);

    /// Read a linearly interpolated sample at a fractional absolute position.
    ///
    /// Positions are `f64` so a fraction keeps its resolution far into long
    /// buffers.
    ///
    /// The position is wrapped into `[0, len)` first, so callers can pass
    /// `write_index - delay` without caring about sign or how many times it
    /// wraps around.
    ///
    /// ```text
    ///        i0      i1
    ///  ──────┼───x───┼──────
    ///        │ f │
    ///
    ///  out = s[i0] * (1 - f) + s[i1] * f
    /// ```
    fn read_interpolated(&self, position: f64) -> f32 {
        let len = self.len();
        let len_f = len as f64;

        let mut pos = position % len_f;
        if pos < 0.0 {
            pos += len_f;
        }
        // -tiny + len can round up to len.
        if pos >= len_f {
            pos -= len_f;
        }

        // pos is non-negative, so truncation is floor.
        let i0 = (pos as usize).min(len - 1);
        let i1 = if i0 + 1 == len { 0 } else { i0 + 1 };
        let frac = (pos - i0 as f64) as f32;

        self.sample(i0) * (1.0 - frac) + self.sample(i1) * frac
    }
}

/// An in-memory version of the [`Delay`] trait.
///
/// `N` is the static upper bound of the storage, the runtime length given to
/// [`Delay::with_len`] can be anything in `1..=N`.
#[derive(Debug, Clone)]
pub struct MemoryDelay<const N: usize> {
    buffer: Vec<f32, N>,
    index: usize,
}

impl<const N: usize> Delay for MemoryDelay<N> {
    fn with_len(len: usize) -> Result<Self, Error> {
        if len == 0 {
            return Err(Error::InvalidArgument {
                param: Param::Capacity,
                reason: "must be greater than 0",
            });
        }

        let mut buffer = Vec::new();
        buffer.resize(len, 0.0).map_err(|_| Error::InvalidArgument {
            param: Param::Capacity,
            reason: "exceeds the static storage",
        })?;

        Ok(Self { buffer, index: 0 })
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    fn sample(&self, index: usize) -> f32 {
        self.buffer[index]
    }

    #[inline(always)]
    fn write_index(&self) -> usize {
        self.index
    }

    fn write(&mut self, v: f32) {
        self.buffer[self.index] = v;
    }

    fn advance(&mut self) {
        self.index += 1;
        if self.index >= self.buffer.len() {
            self.index = 0;
        }
    }

    fn clear(&mut self) {
        for s in self.buffer.iter_mut() {
            *s = 0.0;
        }
        self.index = 0;
    }
}
