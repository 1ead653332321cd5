//! Blues Notecard client — the cloud relay on the local bus.
//!
//! ```text
//!  AlarmService ──▶ NotecardRelay ──▶ Notecard<T> ──▶ NotecardTransport
//!                   (CloudRelayPort)  (JSON lines)    (I²C / test double)
//! ```
//!
//! A request is serialised with `serde_json`, sent as one line, and the
//! single-line reply is checked for an `err` field.  Nothing is retried:
//! a failed transaction resets the link once so the *next* request starts
//! clean, and the error is handed back to the caller to log.

pub mod i2c;
pub mod request;
pub mod transport;

use core::fmt;

use log::{debug, warn};
use serde::Serialize;

pub use request::{AlarmBody, HubSet, NoteAdd, Response, UserAgent};
pub use transport::{NotecardTransport, ResponseBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotecardError {
    /// The request could not be encoded as JSON.
    Serialize,
    /// An I²C read or write was NAKed or failed.
    Bus,
    /// The card answered with an unexpected frame.
    Protocol,
    /// No complete response line arrived in time.
    Timeout,
    /// The response did not fit in the receive buffer.
    ResponseTooLarge,
    /// The response was not a JSON object.
    Malformed,
    /// The card rejected the request (`err` in the response).
    Card,
}

impl fmt::Display for NotecardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize => write!(f, "request serialisation failed"),
            Self::Bus => write!(f, "I2C bus error"),
            Self::Protocol => write!(f, "unexpected I2C framing"),
            Self::Timeout => write!(f, "response timed out"),
            Self::ResponseTooLarge => write!(f, "response too large"),
            Self::Malformed => write!(f, "malformed response"),
            Self::Card => write!(f, "request rejected by card"),
        }
    }
}

impl core::error::Error for NotecardError {}

pub struct Notecard<T> {
    transport: T,
    response: ResponseBuf,
}

impl<T: NotecardTransport> Notecard<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            response: ResponseBuf::new(),
        }
    }

    /// Send one request and wait for its response.
    pub fn request<R: Serialize>(&mut self, req: &R) -> Result<Response, NotecardError> {
        let mut line = serde_json::to_vec(req).map_err(|_| NotecardError::Serialize)?;
        line.push(b'\n');
        debug!("notecard >> {}", String::from_utf8_lossy(&line).trim_end());

        if let Err(e) = self.transport.transact(&line, &mut self.response) {
            warn!("Notecard transaction failed: {}", e);
            if let Err(reset_err) = self.transport.reset() {
                warn!("Notecard reset failed: {}", reset_err);
            }
            return Err(e);
        }

        let raw = self.response.as_slice();
        debug!("notecard << {}", String::from_utf8_lossy(raw).trim_end());

        let resp: Response =
            serde_json::from_slice(raw.trim_ascii()).map_err(|_| NotecardError::Malformed)?;
        if let Some(err) = &resp.err {
            warn!("Notecard error: {}", err);
            return Err(NotecardError::Card);
        }
        Ok(resp)
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}
