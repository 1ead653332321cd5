//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AlarmService (domain)
//! ```
//!
//! Driven adapters (GPIO, Notecard, log) implement these traits.  The
//! [`AlarmService`](super::service::AlarmService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::config::HubMode;
use crate::error::GpioError;
use crate::notecard::NotecardError;

/// Level of the bilge alarm input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmState {
    /// No water at the sensor (pin low).
    Clear,
    /// Water detected (pin high).
    Active,
}

impl AlarmState {
    pub const fn from_level(high: bool) -> Self {
        if high { Self::Active } else { Self::Clear }
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Numeric value reported in the note body.
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Clear => 0,
            Self::Active => 1,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// GPIO ports (driven adapter: hardware ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the current level of the alarm input.
pub trait AlarmInputPort {
    fn read_alarm(&mut self) -> Result<AlarmState, GpioError>;
}

/// Write-side port: the indicator output that mirrors the alarm.
pub trait IndicatorPort {
    fn set_indicator(&mut self, state: AlarmState) -> Result<(), GpioError>;
}

// ───────────────────────────────────────────────────────────────
// Cloud relay port (driven adapter: domain → Notecard)
// ───────────────────────────────────────────────────────────────

/// Settings sent to the relay once at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubSettings<'a> {
    pub product_uid: &'a str,
    pub serial_number: &'a str,
    pub mode: HubMode,
    pub user_agent: Option<&'a str>,
}

/// Blocking, fire-and-forget uplink.  Implementations must not retry;
/// the caller logs the error and moves on.
pub trait CloudRelayPort {
    /// Claim the device under a product and set the sync mode.
    fn configure_hub(&mut self, settings: &HubSettings<'_>) -> Result<(), NotecardError>;

    /// Queue one alarm report.  `sync` asks for immediate upload.
    fn report_alarm(&mut self, state: AlarmState, sync: bool) -> Result<(), NotecardError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
