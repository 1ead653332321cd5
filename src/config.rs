//! System configuration parameters
//!
//! All tunable parameters for the bilge alarm.  Nothing is persisted: the
//! values are compiled in, with the Notehub product UID taken from the
//! `BILGE_PRODUCT_UID` build environment variable when it is set.  An
//! over-long UID is a build error, never a silently shortened one.

use serde::{Deserialize, Serialize};

use crate::debounce::DEFAULT_WINDOW_MS;
use crate::error::{Error, Result};

/// Notehub product UID the Notecard is claimed under.
pub const PRODUCT_UID: &str = match option_env!("BILGE_PRODUCT_UID") {
    Some(uid) => uid,
    None => "com.example.marine:bilge_alarm",
};

/// Serial number reported to Notehub.
pub const SERIAL_NUMBER: &str = "bilge-alarm";

/// User agent sent in the `hub.set` body, if `BILGE_USER_AGENT` is set.
pub const USER_AGENT: Option<&str> = option_env!("BILGE_USER_AGENT");

pub const PRODUCT_UID_CAP: usize = 64;
pub const SERIAL_NUMBER_CAP: usize = 32;
pub const USER_AGENT_CAP: usize = 32;

const _: () = assert!(
    PRODUCT_UID.len() <= PRODUCT_UID_CAP,
    "BILGE_PRODUCT_UID is longer than 64 bytes"
);
const _: () = assert!(SERIAL_NUMBER.len() <= SERIAL_NUMBER_CAP);
const _: () = match USER_AGENT {
    Some(agent) => assert!(
        agent.len() <= USER_AGENT_CAP,
        "BILGE_USER_AGENT is longer than 32 bytes"
    ),
    None => {}
};

/// Notecard default I²C address.
pub const NOTECARD_I2C_ADDR_DEFAULT: u8 = 0x17;
/// Largest single I²C write/read the Notecard accepts.
pub const NOTECARD_I2C_MAX_DEFAULT: u8 = 255;

/// Notecard hub synchronisation mode (`hub.set` `mode`).
///
/// Only `minimum` is used: the card connects when a note asks for `sync`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HubMode {
    Minimum,
}

impl HubMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmConfig {
    // --- Notehub ---
    /// Product UID, `com.<domain>.<user>:<project>`
    pub product_uid: heapless::String<PRODUCT_UID_CAP>,
    /// Device serial number shown in Notehub
    pub serial_number: heapless::String<SERIAL_NUMBER_CAP>,
    /// Optional user agent reported with `hub.set`
    pub user_agent: Option<heapless::String<USER_AGENT_CAP>>,
    /// Hub synchronisation mode
    pub hub_mode: HubMode,
    /// Ask the Notecard to sync each note immediately
    pub note_sync: bool,

    // --- Alarm input ---
    /// Quiet time required between accepted alarm edges (milliseconds)
    pub debounce_timeout_ms: u32,

    // --- Notecard I²C ---
    /// 7-bit I²C address
    pub notecard_i2c_address: u8,
    /// Maximum bytes per I²C chunk
    pub notecard_i2c_max_chunk: u8,
    /// Give up on a request/response transaction after this long (milliseconds)
    pub notecard_timeout_ms: u32,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            // The const asserts above guarantee these fit.
            product_uid: fixed(PRODUCT_UID).unwrap_or_default(),
            serial_number: fixed(SERIAL_NUMBER).unwrap_or_default(),
            user_agent: USER_AGENT.and_then(fixed),
            hub_mode: HubMode::Minimum,
            note_sync: true,

            debounce_timeout_ms: DEFAULT_WINDOW_MS,

            notecard_i2c_address: NOTECARD_I2C_ADDR_DEFAULT,
            notecard_i2c_max_chunk: NOTECARD_I2C_MAX_DEFAULT,
            notecard_timeout_ms: 10_000,
        }
    }
}

impl AlarmConfig {
    /// Range-check every field.  Called once at boot before anything is
    /// configured from it.
    pub fn validate(&self) -> Result<()> {
        if self.product_uid.is_empty() {
            return Err(Error::Config("product UID is empty"));
        }
        if !self.product_uid.contains(':') {
            return Err(Error::Config("product UID must look like com.domain.user:project"));
        }
        if self.serial_number.is_empty() {
            return Err(Error::Config("serial number is empty"));
        }
        if self.debounce_timeout_ms == 0 {
            return Err(Error::Config("debounce timeout must be non-zero"));
        }
        if self.notecard_i2c_address > 0x7F {
            return Err(Error::Config("I2C address is not 7-bit"));
        }
        if self.notecard_i2c_max_chunk == 0 {
            return Err(Error::Config("I2C chunk size must be non-zero"));
        }
        if self.notecard_timeout_ms == 0 {
            return Err(Error::Config("Notecard timeout must be non-zero"));
        }
        Ok(())
    }
}

/// Copy `s` into a fixed-capacity string.  `None` if it does not fit;
/// never truncates.
pub fn fixed<const N: usize>(s: &str) -> Option<heapless::String<N>> {
    heapless::String::try_from(s).ok()
}
