use super::sinc::{coincide, sinc, DELTA_TOLERANCE};

/// One weighted read position in the delay.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tap {
    /// Index in `0..count`.
    pub index: usize,
    /// Delay in samples back from the write cursor.
    pub position: f64,
    /// Sinc weight of the read.
    pub gain: f32,
}

/// The taps for one set of delay parameters.
///
/// With `K` auxiliary pairs there are `2K + 2` taps, spaced by
/// `delta = tau2 - tau1`. The first `K + 1` end at `tau1` and walk away from
/// `tau2`, the last `K + 1` start at `tau2` and walk away from `tau1`.
///
/// ```text
///   k:    0        K-1       K        K+1      K+2      2K+1
///         │ ◀─delta─▶│◀─delta─▶│◀─delta─▶│◀─delta─▶│ ...  │
///   t: tau1-K·d    ...     tau1      tau2   tau2+d  ...  tau2+K·d
/// ```
///
/// Each tap is weighted by `sinc((t - tau) / delta)` where `tau` is the
/// blended delay. When `tau` sits on `tau1` or `tau2` every other tap lands
/// on a sinc zero crossing.
///
/// If the two delays coincide there is nothing to blend, and the schedule is a
/// single tap at `tau1` with unit gain.
#[derive(Debug, Clone)]
pub struct TapSchedule {
    k: usize,
    tau1: f64,
    tau2: f64,
    delta: f64,
    tau: f64,
    fixed: bool,
    next: usize,
    count: usize,
}

impl TapSchedule {
    /// `k` must be such that `2k + 2` fits in a `usize`, which the parameter
    /// validation guarantees.
    pub fn new(k: usize, tau1: f64, tau2: f64, alpha: f32) -> Self {
        let fixed = coincide(tau1, tau2);

        let delta = tau2 - tau1;
        // Unreachable past the coincide check, unless rounding disagrees.
        let delta = if delta > -DELTA_TOLERANCE && delta < DELTA_TOLERANCE {
            1.0
        } else {
            delta
        };

        let alpha = alpha as f64;

        let count = if fixed { 1 } else { 2 * k + 2 };

        TapSchedule {
            k,
            tau1,
            tau2,
            delta,
            tau: (1.0 - alpha) * tau1 + alpha * tau2,
            fixed,
            next: 0,
            count,
        }
    }

    /// Whether the delays coincide and this is a plain fractional delay.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// The blended delay the taps are weighted around.
    pub fn blended_delay(&self) -> f64 {
        self.tau
    }

    fn tap_at(&self, index: usize) -> Tap {
        if self.fixed {
            return Tap {
                index,
                position: self.tau1,
                gain: 1.0,
            };
        }

        let position = if index <= self.k {
            self.tau1 - (self.k - index) as f64 * self.delta
        } else {
            self.tau2 + (index - self.k - 1) as f64 * self.delta
        };

        Tap {
            index,
            position,
            gain: sinc(((position - self.tau) / self.delta) as f32),
        }
    }
}

impl Iterator for TapSchedule {
    type Item = Tap;

    fn next(&mut self) -> Option<Tap> {
        if self.next >= self.count {
            return None;
        }
        let tap = self.tap_at(self.next);
        self.next += 1;
        Some(tap)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for TapSchedule {}
