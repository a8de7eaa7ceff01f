// For tests we use std.
#![cfg_attr(not(test), no_std)]

mod audio;
mod error;

pub use audio::{AudioNode, Delay, MemoryDelay};
pub use audio::{MemorySincDelay, MultiTapSincDelay};
pub use audio::{Params, DEFAULT_K, DEFAULT_SAMPLE_RATE};
pub use audio::{sinc, DELTA_TOLERANCE, SINC_TOLERANCE};
pub use audio::{Tap, TapSchedule};
pub use error::{Error, ErrorKind, Param};

#[cfg(test)]
mod sweep;
