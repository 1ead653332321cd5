//! Application service — the hexagonal core.
//!
//! [`AlarmService`] is the worker half of the ISR → worker pipeline.  The
//! ISR only debounces and wakes; everything that may block (GPIO writes,
//! the Notecard round trip) happens here, in task context.
//!
//! ```text
//!  AlarmInputPort ──▶ ┌────────────────────┐ ──▶ CloudRelayPort
//!                     │    AlarmService    │
//!   IndicatorPort ◀── │  read · mirror ·   │ ──▶ EventSink
//!                     │  report            │
//!                     └────────────────────┘
//! ```

use log::info;

use crate::config::AlarmConfig;
use crate::error;

use super::events::AppEvent;
use super::ports::{AlarmInputPort, AlarmState, CloudRelayPort, EventSink, HubSettings, IndicatorPort};

/// Running counters, for the log and for tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlarmStats {
    pub wakes: u32,
    pub reports_sent: u32,
    pub reports_failed: u32,
    pub indicator_failures: u32,
    pub read_failures: u32,
    pub last_state: Option<AlarmState>,
}

/// What one wake did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeOutcome {
    /// Level read from the pin, `None` if the read failed.
    pub state: Option<AlarmState>,
    pub indicator_ok: bool,
    pub reported: bool,
}

pub struct AlarmService {
    config: AlarmConfig,
    stats: AlarmStats,
}

impl AlarmService {
    pub fn new(config: AlarmConfig) -> Self {
        Self {
            config,
            stats: AlarmStats::default(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Configure the hub.  A failure here is fatal: without a product UID
    /// the card has nowhere to send reports.
    pub fn start(
        &mut self,
        relay: &mut impl CloudRelayPort,
        sink: &mut impl EventSink,
    ) -> error::Result<()> {
        let settings = HubSettings {
            product_uid: &self.config.product_uid,
            serial_number: &self.config.serial_number,
            mode: self.config.hub_mode,
            user_agent: self.config.user_agent.as_deref(),
        };
        info!(
            "Configuring hub: product={} sn={} mode={}",
            settings.product_uid,
            settings.serial_number,
            settings.mode.as_str()
        );

        if let Err(e) = relay.configure_hub(&settings) {
            sink.emit(&AppEvent::HubConfigFailed(e));
            return Err(e.into());
        }
        sink.emit(&AppEvent::Started);
        Ok(())
    }

    // ── Per-wake handling ─────────────────────────────────────

    /// Read the pin, mirror it to the indicator, report it.
    ///
    /// Indicator and report failures are emitted and otherwise ignored;
    /// the report is sent even if the indicator write failed.
    pub fn handle_wake(
        &mut self,
        hw: &mut (impl AlarmInputPort + IndicatorPort),
        relay: &mut impl CloudRelayPort,
        sink: &mut impl EventSink,
    ) -> WakeOutcome {
        self.stats.wakes = self.stats.wakes.wrapping_add(1);

        let state = match hw.read_alarm() {
            Ok(state) => state,
            Err(e) => {
                self.stats.read_failures += 1;
                sink.emit(&AppEvent::InputReadFailed(e));
                return WakeOutcome {
                    state: None,
                    indicator_ok: false,
                    reported: false,
                };
            }
        };
        self.stats.last_state = Some(state);
        sink.emit(&AppEvent::AlarmChanged(state));

        let indicator_ok = match hw.set_indicator(state) {
            Ok(()) => true,
            Err(e) => {
                self.stats.indicator_failures += 1;
                sink.emit(&AppEvent::IndicatorFailed(e));
                false
            }
        };

        let reported = match relay.report_alarm(state, self.config.note_sync) {
            Ok(()) => {
                self.stats.reports_sent += 1;
                sink.emit(&AppEvent::ReportSent(state));
                true
            }
            Err(e) => {
                self.stats.reports_failed += 1;
                sink.emit(&AppEvent::ReportFailed(e));
                false
            }
        };

        WakeOutcome {
            state: Some(state),
            indicator_ok,
            reported,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn stats(&self) -> AlarmStats {
        self.stats
    }
}
