//! One-shot hardware peripheral initialization.
//!
//! Configures the alarm input and indicator output using raw ESP-IDF sys
//! calls, and installs the GPIO ISR for the alarm pin.  `main()` calls
//! [`init_alarm_hardware`] once, before the worker loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::error::GpioError;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    IsrInstallFailed(i32),
    IsrHandlerFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::IsrInstallFailed(rc) => write!(f, "GPIO ISR service install failed (rc={})", rc),
            Self::IsrHandlerFailed(rc) => write!(f, "GPIO ISR handler add failed (rc={})", rc),
        }
    }
}

impl core::error::Error for HwInitError {}

/// Configure both pins, then enable the alarm interrupt.  The worker must
/// already be registered as the wake target.
pub fn init_alarm_hardware() -> crate::error::Result<()> {
    init_peripherals()?;
    init_isr_service()?;
    Ok(())
}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the worker loop; single-threaded.
    unsafe {
        init_alarm_input()?;
        init_led_output()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── GPIO Input ────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_alarm_input() -> Result<(), HwInitError> {
    // Pull-down so a disconnected sensor reads as "no water".
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::ALARM_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_ENABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_ANYEDGE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }

    info!("hw_init: alarm input configured (GPIO{})", pins::ALARM_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe from task and ISR context.
    (unsafe { gpio_get_level(pin) }) != 0
}

// ── GPIO Output ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_led_output() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::LED_GPIO,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
    unsafe { gpio_set_level(pins::LED_GPIO, 0) };

    info!("hw_init: LED output configured (GPIO{})", pins::LED_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) -> Result<(), GpioError> {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // worker task only.
    let ret = unsafe { gpio_set_level(pin, u32::from(high)) };
    if ret != ESP_OK as i32 {
        return Err(GpioError::WriteFailed(pin));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) -> Result<(), GpioError> {
    Ok(())
}

// ── GPIO ISR Service ──────────────────────────────────────────

#[cfg(target_os = "espidf")]
use crate::drivers::alarm_input::alarm_isr_handler;

#[cfg(target_os = "espidf")]
unsafe extern "C" fn alarm_gpio_isr(_arg: *mut core::ffi::c_void) {
    // SAFETY: esp_timer_get_time is a timer counter read; safe in ISR context.
    let now_us = unsafe { esp_timer_get_time() } as u64;
    alarm_isr_handler(crate::debounce::ms_timestamp(now_us));
}

/// Install the per-pin GPIO ISR service and register the alarm handler.
/// Call after init_peripherals() and after the worker has registered
/// itself as the wake target.
#[cfg(target_os = "espidf")]
pub fn init_isr_service() -> Result<(), HwInitError> {
    // SAFETY: ESP_ERR_INVALID_STATE means the service was already installed
    // (acceptable).  The handler is a static fn that only touches atomics
    // and the ISR-safe task notification.
    unsafe {
        let ret = gpio_install_isr_service(0);
        if ret != ESP_OK as i32 && ret != ESP_ERR_INVALID_STATE as i32 {
            return Err(HwInitError::IsrInstallFailed(ret));
        }

        // Alarm: both edges (water arriving and water leaving)
        gpio_set_intr_type(pins::ALARM_GPIO, gpio_int_type_t_GPIO_INTR_ANYEDGE);
        let ret = gpio_isr_handler_add(pins::ALARM_GPIO, Some(alarm_gpio_isr), core::ptr::null_mut());
        if ret != ESP_OK as i32 {
            return Err(HwInitError::IsrHandlerFailed(ret));
        }
        gpio_intr_enable(pins::ALARM_GPIO);

        info!("hw_init: ISR service installed (alarm, any edge)");
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_isr_service() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): ISR service skipped");
    Ok(())
}
