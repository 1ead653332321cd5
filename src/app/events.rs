//! Outbound application events.
//!
//! The [`AlarmService`](super::service::AlarmService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Today the only sink
//! writes them to the serial log.

use crate::error::GpioError;
use crate::notecard::NotecardError;

use super::ports::AlarmState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Hub configured, waiting for the first alarm edge.
    Started,

    /// The hub could not be configured at boot.
    HubConfigFailed(NotecardError),

    /// The worker woke and read the pin.
    AlarmChanged(AlarmState),

    /// The pin could not be read; nothing else happens on this wake.
    InputReadFailed(GpioError),

    /// The indicator could not be driven.
    IndicatorFailed(GpioError),

    /// The alarm report was accepted by the relay.
    ReportSent(AlarmState),

    /// The alarm report failed (not retried).
    ReportFailed(NotecardError),
}
