use crate::error::{Error, Param};

/// Auxiliary tap pairs used when nothing else is said.
pub const DEFAULT_K: i32 = 1;

/// Only descriptive, processing is in samples.
pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;

/// Parameters of a [`MultiTapSincDelay`](super::MultiTapSincDelay).
///
/// A plain value. Nothing is checked until it's handed to the delay, which
/// knows how long its buffer is.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Params {
    /** Number of auxiliary tap pairs. `>= 0`, total taps is `2K + 2`. */
    pub k: i32,
    /** First delay in samples. Selected when `alpha` is 0. */
    pub tau1: f64,
    /** Second delay in samples. Selected when `alpha` is 1. */
    pub tau2: f64,
    /** Blend between `tau1` and `tau2`, in `[0, 1]`. */
    pub alpha: f32,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            k: DEFAULT_K,
            tau1: 1.0,
            tau2: 2.0,
            alpha: 0.0,
        }
    }
}

impl Params {
    /// Check every field against a buffer of `max_delay_samples`.
    pub fn validate(&self, max_delay_samples: usize) -> Result<(), Error> {
        let limit = tau_limit(max_delay_samples);

        check_k(self.k)?;
        check_tau(Param::Tau1, self.tau1, limit)?;
        check_tau(Param::Tau2, self.tau2, limit)?;
        check_alpha(self.alpha)?;

        Ok(())
    }

    /// Taps evaluated per sample when the delays differ. Negative `k` counts as 0.
    pub fn tap_count(&self) -> usize {
        (self.k.max(0) as usize)
            .saturating_mul(2)
            .saturating_add(2)
    }

    /// The delay the taps are centered on, `(1 - alpha) * tau1 + alpha * tau2`.
    pub fn blended_delay(&self) -> f64 {
        let alpha = self.alpha as f64;
        (1.0 - alpha) * self.tau1 + alpha * self.tau2
    }
}

/// Delays must stay strictly below this, leaving room for the interpolation
/// neighbour.
pub(crate) fn tau_limit(max_delay_samples: usize) -> f64 {
    max_delay_samples as f64 - 1.0
}

pub(crate) fn check_k(k: i32) -> Result<(), Error> {
    if k < 0 {
        return Err(Error::InvalidArgument {
            param: Param::TapPairs,
            reason: "cannot be negative",
        });
    }

    let fits = usize::try_from(k)
        .ok()
        .and_then(|k| k.checked_mul(2))
        .and_then(|n| n.checked_add(2))
        .is_some();

    if !fits {
        return Err(Error::InvalidArgument {
            param: Param::TapPairs,
            reason: "tap count overflows",
        });
    }

    Ok(())
}

pub(crate) fn check_tau(param: Param, tau: f64, limit: f64) -> Result<(), Error> {
    // NaN is never contained.
    if !(0.0..limit).contains(&tau) {
        return Err(Error::OutOfRange {
            param,
            value: tau,
            limit,
        });
    }
    Ok(())
}

pub(crate) fn check_alpha(alpha: f32) -> Result<(), Error> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(Error::InvalidArgument {
            param: Param::Alpha,
            reason: "must be within [0, 1]",
        });
    }
    Ok(())
}
