//! Morphing delay built from sinc weighted taps.
//!
//! * N - static storage bound, in samples
//! * K - auxiliary tap pairs, `2K + 2` taps in total
//! * tau1, tau2 - the two delays, in samples
//! * alpha - blend between them
//!

mod delay;
mod morph;
mod params;
mod sinc;
mod taps;

pub use delay::{Delay, MemoryDelay};
pub use morph::{MemorySincDelay, MultiTapSincDelay};
pub use params::{Params, DEFAULT_K, DEFAULT_SAMPLE_RATE};
pub use sinc::{sinc, DELTA_TOLERANCE, SINC_TOLERANCE};
pub use taps::{Tap, TapSchedule};

pub trait AudioNode<const C: usize> {
    fn process(&mut self, input: [f32; C]) -> [f32; C];
}
