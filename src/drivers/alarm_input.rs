//! ISR-debounced bilge alarm input.
//!
//! ## Hardware
//!
//! Float / conductive water sensor driving a GPIO high when water is
//! present.  The GPIO interrupts on both edges; the ISR runs the
//! [`Debouncer`] and, for an accepted edge, wakes the worker through
//! [`ALARM_WAKE`].  The ISR never reads or reports the level itself: the
//! worker re-reads the pin once woken, so the value reported is the
//! settled one.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real GPIO level via hw_init.
//! On host/test: reads a simulated level set with [`sim_set_alarm_level`].

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

use crate::debounce::{DEFAULT_WINDOW_MS, Debouncer};
use crate::wake::WakeSignal;

/// Debounce state shared between the alarm ISR and the worker.
pub static ALARM_DEBOUNCE: Debouncer = Debouncer::new(DEFAULT_WINDOW_MS);

/// Wake target for accepted alarm edges.
pub static ALARM_WAKE: WakeSignal = WakeSignal::new();

#[cfg(not(target_os = "espidf"))]
static SIM_ALARM_LEVEL: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_alarm_level(high: bool) {
    SIM_ALARM_LEVEL.store(high, Ordering::Relaxed);
}

/// Apply the configured debounce window.  Call before enabling the ISR.
pub fn configure(window_ms: u32) {
    ALARM_DEBOUNCE.set_window(window_ms);
}

/// ISR handler: register this on the alarm GPIO (any edge).
/// Safe to call from interrupt context (atomics + task notification only).
/// Returns `true` if the worker was woken.
pub fn alarm_isr_handler(now_ms: u32) -> bool {
    handle_edge(&ALARM_DEBOUNCE, &ALARM_WAKE, now_ms)
}

fn handle_edge(debounce: &Debouncer, wake: &WakeSignal, now_ms: u32) -> bool {
    debounce.on_edge(now_ms) && wake.wake()
}

pub struct AlarmInput {
    gpio: i32,
}

impl AlarmInput {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// GPIO pin the sensor is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// `true` = water present.
    #[cfg(target_os = "espidf")]
    pub fn read_level(&self) -> bool {
        crate::drivers::hw_init::gpio_read(self.gpio)
    }

    /// `true` = water present.
    #[cfg(not(target_os = "espidf"))]
    pub fn read_level(&self) -> bool {
        SIM_ALARM_LEVEL.load(Ordering::Relaxed)
    }
}
