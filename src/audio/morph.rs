use log::{debug, trace};

use crate::error::{Error, Param};

use super::delay::{Delay, MemoryDelay};
use super::params::{self, Params, DEFAULT_K, DEFAULT_SAMPLE_RATE};
use super::taps::TapSchedule;
use super::AudioNode;

/// A delay that morphs between two delay times.
///
/// Instead of jumping from `tau1` to `tau2` (clicks) or crossfading two reads
/// (smearing), the output is a sum of `2K + 2` sinc weighted taps spaced by
/// `tau2 - tau1`. As `alpha` goes from 0 to 1 the weight slides from the tap
/// at `tau1` to the tap at `tau2`, and the surrounding taps band limit the
/// transition. See [`TapSchedule`] for the tap layout.
///
/// ```text
///              ┌──────────┐
/// in ────────▶ │  delay   │──┬── t0 ── h0 ──┐
///              │  buffer  │──┼── t1 ── h1 ──┤
///              │          │──┼── ..      .. ├──▶ Σ ──▶ out
///              │          │──┴── t2K+1 ─────┘
///              └──────────┘
/// ```
///
/// Processing never allocates and does work proportional to `2K + 2`. Nothing
/// here is synchronized; a host changing parameters from another thread than
/// the audio thread has to bring its own.
#[derive(Debug, Clone)]
pub struct MultiTapSincDelay<D> {
    delay: D,
    params: Params,
    sample_rate: f32,
}

/// [`MultiTapSincDelay`] over in-memory storage of at most `N` samples.
pub type MemorySincDelay<const N: usize> = MultiTapSincDelay<MemoryDelay<N>>;

impl<D: Delay> MultiTapSincDelay<D> {
    /// Creates a delay holding `max_delay_samples` samples.
    ///
    /// Starts out with `tau1 = 1`, `tau2 = 2` and `alpha = 0`, which needs a
    /// buffer of at least 4 samples. `sample_rate` is kept for the host to
    /// read back; the delay itself works in samples.
    pub fn new(max_delay_samples: usize, initial_k: i32, sample_rate: f32) -> Result<Self, Error> {
        let delay = D::with_len(max_delay_samples)?;

        params::check_k(initial_k)?;

        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(Error::InvalidArgument {
                param: Param::SampleRate,
                reason: "must be positive",
            });
        }

        let mut this = MultiTapSincDelay {
            delay,
            params: Params::default(),
            sample_rate,
        };

        let defaults = Params {
            k: initial_k,
            ..Params::default()
        };
        this.set_params(defaults)?;

        debug!(
            "Sinc delay: {} samples, K {}, {} taps, sample rate {}",
            max_delay_samples,
            initial_k,
            this.tap_count(),
            sample_rate
        );

        Ok(this)
    }

    /// Creates a delay with `K = 1` at 44.1kHz.
    pub fn with_capacity(max_delay_samples: usize) -> Result<Self, Error> {
        Self::new(max_delay_samples, DEFAULT_K, DEFAULT_SAMPLE_RATE)
    }

    /// Set the number of auxiliary tap pairs.
    pub fn set_k(&mut self, k: i32) -> Result<(), Error> {
        params::check_k(k).inspect_err(|e| debug!("Rejected K {}: {}", k, e))?;
        self.params.k = k;
        trace!("K = {}", k);
        Ok(())
    }

    /// Set the first delay, in samples.
    pub fn set_tau1(&mut self, tau1: f64) -> Result<(), Error> {
        params::check_tau(Param::Tau1, tau1, self.tau_limit())
            .inspect_err(|e| debug!("Rejected tau1: {}", e))?;
        self.params.tau1 = tau1;
        trace!("tau1 = {}", tau1);
        Ok(())
    }

    /// Set the second delay, in samples.
    pub fn set_tau2(&mut self, tau2: f64) -> Result<(), Error> {
        params::check_tau(Param::Tau2, tau2, self.tau_limit())
            .inspect_err(|e| debug!("Rejected tau2: {}", e))?;
        self.params.tau2 = tau2;
        trace!("tau2 = {}", tau2);
        Ok(())
    }

    /// Set the blend. 0 is `tau1`, 1 is `tau2`.
    pub fn set_alpha(&mut self, alpha: f32) -> Result<(), Error> {
        params::check_alpha(alpha).inspect_err(|e| debug!("Rejected alpha: {}", e))?;
        self.params.alpha = alpha;
        trace!("alpha = {}", alpha);
        Ok(())
    }

    /// Replace all parameters at once. Either all of them are applied or none.
    pub fn set_params(&mut self, params: Params) -> Result<(), Error> {
        params
            .validate(self.delay.len())
            .inspect_err(|e| debug!("Rejected {:?}: {}", params, e))?;
        self.params = params;
        trace!("params = {:?}", params);
        Ok(())
    }

    pub fn params(&self) -> Params {
        self.params
    }

    pub fn k(&self) -> i32 {
        self.params.k
    }

    pub fn tau1(&self) -> f64 {
        self.params.tau1
    }

    pub fn tau2(&self) -> f64 {
        self.params.tau2
    }

    pub fn alpha(&self) -> f32 {
        self.params.alpha
    }

    /// Taps evaluated per sample when `tau1` and `tau2` differ.
    pub fn tap_count(&self) -> usize {
        self.params.tap_count()
    }

    pub fn blended_delay(&self) -> f64 {
        self.params.blended_delay()
    }

    pub fn max_delay_samples(&self) -> usize {
        self.delay.len()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// The taps the next [`process`](Self::process) will read.
    pub fn taps(&self) -> TapSchedule {
        let p = &self.params;
        // k >= 0 and 2k + 2 fits, checked on the way in.
        TapSchedule::new(p.k as usize, p.tau1, p.tau2, p.alpha)
    }

    /// Interpolated read at an absolute, possibly fractional and out of range,
    /// buffer position.
    pub fn read_interpolated(&self, position: f64) -> f32 {
        self.delay.read_interpolated(position)
    }

    /// Process one sample.
    pub fn process(&mut self, input: f32) -> f32 {
        self.delay.write(input);

        let write = self.delay.write_index() as f64;

        let mut out = 0.0;
        for tap in self.taps() {
            out += self.delay.read_interpolated(write - tap.position) * tap.gain;
        }

        self.delay.advance();

        out
    }

    /// Process a block in place, sample by sample.
    pub fn process_block(&mut self, block: &mut [f32]) {
        for s in block.iter_mut() {
            *s = self.process(*s);
        }
    }

    /// Silence the buffer and rewind. Parameters are kept.
    pub fn reset(&mut self) {
        self.delay.clear();
        trace!("Sinc delay reset");
    }

    fn tau_limit(&self) -> f64 {
        params::tau_limit(self.delay.len())
    }
}

impl<D: Delay> AudioNode<1> for MultiTapSincDelay<D> {
    fn process(&mut self, input: [f32; 1]) -> [f32; 1] {
        [MultiTapSincDelay::process(self, input[0])]
    }
}
