//! Application core — pure domain logic, zero I/O.
//!
//! The whole business rule lives here: on each wake, read the alarm pin,
//! mirror it to the indicator, report it to the cloud relay.  Hardware and
//! the Notecard are reached only through the **port traits** in [`ports`],
//! so this layer is fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
