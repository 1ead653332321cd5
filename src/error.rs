//! Unified error types for the bilge alarm firmware.
//!
//! A single `Error` enum for the boot path, so `main` can report a fatal
//! failure uniformly.  All variants are `Copy`; the Notecard's own error
//! text is logged where it is received and not carried further.
//!
//! Per-wake GPIO and Notecard failures are not fatal.  They travel as
//! [`GpioError`] / [`NotecardError`](crate::notecard::NotecardError) inside
//! app events instead.

use core::fmt;

use crate::drivers::hw_init::HwInitError;
use crate::notecard::NotecardError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// The boot-time Notecard request could not be completed.
    Notecard(NotecardError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Notecard(e) => write!(f, "notecard: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

impl From<NotecardError> for Error {
    fn from(e: NotecardError) -> Self {
        Self::Notecard(e)
    }
}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Reading the input level failed.
    ReadFailed(i32),
    /// Driving the output level failed.
    WriteFailed(i32),
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed(pin) => write!(f, "read of GPIO{pin} failed"),
            Self::WriteFailed(pin) => write!(f, "write of GPIO{pin} failed"),
        }
    }
}

impl core::error::Error for GpioError {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
