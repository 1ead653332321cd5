//! Transport abstraction — how request lines reach the Notecard.
//!
//! Concrete implementations:
//! - [`I2cTransport`](super::i2c::I2cTransport) — serial-over-I²C
//! - test doubles that answer from a script (see the unit and integration
//!   tests)
//!
//! The [`Notecard`](super::Notecard) client is generic over
//! `NotecardTransport`, so adding a UART transport requires zero changes
//! to request handling.

use super::NotecardError;

/// Largest response line the client will buffer.
pub const RESPONSE_CAP: usize = 1024;

/// Fixed-capacity buffer a response line is received into.
pub type ResponseBuf = heapless::Vec<u8, RESPONSE_CAP>;

/// Line-oriented request/response channel to a Notecard.
pub trait NotecardTransport {
    /// Send one `\n`-terminated request line and receive the complete
    /// `\n`-terminated response line into `response`.
    fn transact(&mut self, request: &[u8], response: &mut ResponseBuf) -> Result<(), NotecardError>;

    /// Bring the link back to a known state after a failed transaction
    /// (discard any half-received response).
    fn reset(&mut self) -> Result<(), NotecardError>;
}
