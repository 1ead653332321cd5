//! Bilge Alarm Firmware (ESP32-S3) — Main Entry Point
//!
//! Debounced-interrupt-to-action pipeline.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  GPIO ISR (any edge)                                           │
//! │    Debouncer ──▶ WakeSignal ─────────────┐                     │
//! │                                          ▼                     │
//! │  Main task (worker)                                            │
//! │    wait() ──▶ AlarmService::handle_wake                        │
//! │                 read pin ─▶ mirror LED ─▶ note.add (Notecard)  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │  HardwareAdapter   NotecardRelay<I2cTransport>   LogEventSink  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use log::{debug, info};

use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::prelude::*;

use bilgealarm::adapters::hardware::HardwareAdapter;
use bilgealarm::adapters::log_sink::LogEventSink;
use bilgealarm::adapters::notecard_relay::NotecardRelay;
use bilgealarm::adapters::time::Esp32TimeAdapter;
use bilgealarm::app::service::AlarmService;
use bilgealarm::config::AlarmConfig;
use bilgealarm::drivers::alarm_input::{self, ALARM_WAKE, AlarmInput};
use bilgealarm::drivers::hw_init;
use bilgealarm::drivers::indicator_led::IndicatorLed;
use bilgealarm::notecard::i2c::I2cTransport;
use bilgealarm::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Initializing bilge alarm v{}...", env!("CARGO_PKG_VERSION"));

    let config = AlarmConfig::default();
    config.validate().context("Invalid configuration")?;

    // ── 2. Worker identity ────────────────────────────────────
    // Registered before the ISR exists so no accepted edge is lost.
    if !ALARM_WAKE.register_current() {
        anyhow::bail!("no current task to register as alarm worker");
    }
    alarm_input::configure(config.debounce_timeout_ms);

    // ── 3. Notecard on I²C ────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let i2c_config = I2cConfig::new().baudrate(pins::I2C_BAUDRATE_HZ.Hz());
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio8,
        peripherals.pins.gpio9,
        &i2c_config,
    )
    .context("Failed to init I2C")?;
    let mut relay = NotecardRelay::new(I2cTransport::from_config(i2c, FreeRtos, &config));

    let mut sink = LogEventSink::new();
    let mut app = AlarmService::new(config);
    app.start(&mut relay, &mut sink)
        .context("Failed to configure Notecard")?;

    // ── 4. GPIO + interrupt ───────────────────────────────────
    hw_init::init_alarm_hardware().context("Failed to configure alarm GPIO")?;

    let mut hw = HardwareAdapter::new(
        AlarmInput::new(pins::ALARM_GPIO),
        IndicatorLed::new(pins::LED_GPIO),
    );
    let clock = Esp32TimeAdapter::new();

    // ── 5. Worker loop ────────────────────────────────────────
    loop {
        // Suspend until the ISR accepts an edge.
        ALARM_WAKE.wait();

        let outcome = app.handle_wake(&mut hw, &mut relay, &mut sink);
        let stats = app.stats();
        debug!(
            "wake #{} at {} ms: {:?} (sent={}, failed={})",
            stats.wakes,
            clock.uptime_ms(),
            outcome,
            stats.reports_sent,
            stats.reports_failed
        );
    }
}
