//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the ESP-IDF
//! logger (UART / USB-CDC in production).

use log::{error, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("Waiting for alarm...");
            }
            AppEvent::HubConfigFailed(e) => {
                error!("Failed to configure Notecard: {}", e);
            }
            AppEvent::AlarmChanged(state) => {
                info!("Alarm state changed to {}!", state.as_u8());
            }
            AppEvent::InputReadFailed(e) => {
                error!("Failed to read alarm state: {}", e);
            }
            AppEvent::IndicatorFailed(e) => {
                error!("Failed to set LED state: {}", e);
            }
            AppEvent::ReportSent(state) => {
                info!("Notecard accepted ALARM={}", state.as_u8());
            }
            AppEvent::ReportFailed(e) => {
                error!("Failed to send notecard request: {}", e);
            }
        }
    }
}
