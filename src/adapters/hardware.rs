//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the alarm input and indicator drivers, exposing them through
//! [`AlarmInputPort`] and [`IndicatorPort`].  On non-espidf targets the
//! underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{AlarmInputPort, AlarmState, IndicatorPort};
use crate::drivers::alarm_input::AlarmInput;
use crate::drivers::indicator_led::IndicatorLed;
use crate::error::GpioError;

/// Concrete adapter that combines all GPIO behind port traits.
pub struct HardwareAdapter {
    alarm: AlarmInput,
    led: IndicatorLed,
}

impl HardwareAdapter {
    pub fn new(alarm: AlarmInput, led: IndicatorLed) -> Self {
        Self { alarm, led }
    }

    pub fn led_is_on(&self) -> bool {
        self.led.is_on()
    }
}

impl AlarmInputPort for HardwareAdapter {
    fn read_alarm(&mut self) -> Result<AlarmState, GpioError> {
        Ok(AlarmState::from_level(self.alarm.read_level()))
    }
}

impl IndicatorPort for HardwareAdapter {
    fn set_indicator(&mut self, state: AlarmState) -> Result<(), GpioError> {
        self.led.set(state.is_active())
    }
}
