//! GPIO / peripheral pin assignments for the bilge alarm board (ESP32-S3).
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Alarm input (bilge float switch)
// ---------------------------------------------------------------------------

/// Digital input from the bilge water sensor. HIGH = water detected.
/// Interrupts fire on both edges.
pub const ALARM_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Indicator LED
// ---------------------------------------------------------------------------

/// Digital output mirroring the alarm state (active HIGH).
pub const LED_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// I²C bus to the Notecard
// ---------------------------------------------------------------------------

/// Informational only: `main` hands the typed `peripherals.pins.gpioN`
/// singletons to the I²C driver, these must be kept in sync with it.
pub const I2C_SDA_GPIO: i32 = 8;
pub const I2C_SCL_GPIO: i32 = 9;

/// Notecard I²C bus clock (100 kHz standard mode).
pub const I2C_BAUDRATE_HZ: u32 = 100_000;
