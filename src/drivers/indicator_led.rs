//! Single-colour indicator LED mirroring the alarm input.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::error::GpioError;

pub struct IndicatorLed {
    gpio: i32,
    on: bool,
}

impl IndicatorLed {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, on: false }
    }

    pub fn set(&mut self, on: bool) -> Result<(), GpioError> {
        hw_init::gpio_write(self.gpio, on)?;
        self.on = on;
        Ok(())
    }

    pub fn off(&mut self) -> Result<(), GpioError> {
        self.set(false)
    }

    /// Last level successfully written.
    pub fn is_on(&self) -> bool {
        self.on
    }
}
