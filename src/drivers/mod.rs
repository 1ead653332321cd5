//! Alarm input, indicator output, and hardware initialisation.

pub mod alarm_input;
pub mod hw_init;
pub mod indicator_led;
