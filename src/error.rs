use core::fmt;

/// Errors from constructing or configuring a delay.
///
/// Every fallible call either commits its value or fails with one of these and
/// leaves the previous state as it was.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Value outside its logically required domain.
    #[error("invalid {param}: {reason}")]
    InvalidArgument { param: Param, reason: &'static str },

    /// Delay length outside the addressable window `[0, limit)` of the buffer.
    #[error("{param} {value} outside [0, {limit})")]
    OutOfRange { param: Param, value: f64, limit: f64 },
}

/// The class of an [`Error`], without the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
}

/// The parameter an [`Error`] is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Param {
    Capacity,
    SampleRate,
    TapPairs,
    Tau1,
    Tau2,
    Alpha,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    pub fn param(&self) -> Param {
        match self {
            Error::InvalidArgument { param, .. } => *param,
            Error::OutOfRange { param, .. } => *param,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Param::Capacity => "capacity",
            Param::SampleRate => "sample rate",
            Param::TapPairs => "K",
            Param::Tau1 => "tau1",
            Param::Tau2 => "tau2",
            Param::Alpha => "alpha",
        };
        f.write_str(s)
    }
}
