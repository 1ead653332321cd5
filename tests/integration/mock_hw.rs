//! Mock adapters for integration tests.
//!
//! Record every port call so tests can assert on the full history without
//! touching real GPIO or a Notecard.

use bilgealarm::app::events::AppEvent;
use bilgealarm::app::ports::{AlarmInputPort, AlarmState, CloudRelayPort, EventSink, HubSettings, IndicatorPort};
use bilgealarm::config::HubMode;
use bilgealarm::error::GpioError;
use bilgealarm::notecard::NotecardError;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub level: bool,
    pub read_fails: bool,
    pub write_fails: bool,
    pub indicator: Vec<AlarmState>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            level: false,
            read_fails: false,
            write_fails: false,
            indicator: Vec::new(),
        }
    }

    pub fn led_on(&self) -> bool {
        self.indicator.last().is_some_and(|s| s.is_active())
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmInputPort for MockHardware {
    fn read_alarm(&mut self) -> Result<AlarmState, GpioError> {
        if self.read_fails {
            return Err(GpioError::ReadFailed(4));
        }
        Ok(AlarmState::from_level(self.level))
    }
}

impl IndicatorPort for MockHardware {
    fn set_indicator(&mut self, state: AlarmState) -> Result<(), GpioError> {
        if self.write_fails {
            return Err(GpioError::WriteFailed(2));
        }
        self.indicator.push(state);
        Ok(())
    }
}

// ── MockRelay ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum RelayCall {
    ConfigureHub {
        product: String,
        sn: String,
        mode: HubMode,
        agent: Option<String>,
    },
    Report {
        state: AlarmState,
        sync: bool,
    },
}

pub struct MockRelay {
    pub calls: Vec<RelayCall>,
    pub fail_with: Option<NotecardError>,
}

#[allow(dead_code)]
impl MockRelay {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            fail_with: None,
        }
    }

    pub fn reports(&self) -> Vec<AlarmState> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RelayCall::Report { state, .. } => Some(*state),
                RelayCall::ConfigureHub { .. } => None,
            })
            .collect()
    }
}

impl Default for MockRelay {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudRelayPort for MockRelay {
    fn configure_hub(&mut self, settings: &HubSettings<'_>) -> Result<(), NotecardError> {
        self.calls.push(RelayCall::ConfigureHub {
            product: settings.product_uid.to_string(),
            sn: settings.serial_number.to_string(),
            mode: settings.mode,
            agent: settings.user_agent.map(str::to_string),
        });
        self.fail_with.map_or(Ok(()), Err)
    }

    fn report_alarm(&mut self, state: AlarmState, sync: bool) -> Result<(), NotecardError> {
        self.calls.push(RelayCall::Report { state, sync });
        self.fail_with.map_or(Ok(()), Err)
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── SimNotecard (I²C) ─────────────────────────────────────────

/// Byte-level Notecard simulator speaking the serial-over-I²C framing.
/// Replies to each complete request line with the next scripted reply.
pub struct SimNotecard {
    pub address: u8,
    pub lines: Vec<String>,
    partial: Vec<u8>,
    outbox: Vec<u8>,
    replies: Vec<&'static str>,
    query: Option<u8>,
    pub nak: bool,
}

#[allow(dead_code)]
impl SimNotecard {
    pub fn new(replies: Vec<&'static str>) -> Self {
        Self {
            address: 0x17,
            lines: Vec::new(),
            partial: Vec::new(),
            outbox: Vec::new(),
            replies,
            query: None,
            nak: false,
        }
    }
}

impl ErrorType for SimNotecard {
    type Error = ErrorKind;
}

impl I2c for SimNotecard {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
        if self.nak || address != self.address {
            return Err(ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address));
        }
        for op in operations {
            match op {
                Operation::Write(bytes) if bytes.len() == 2 && bytes[0] == 0 => {
                    self.query = Some(bytes[1]);
                }
                Operation::Write(bytes) => {
                    let len = usize::from(bytes[0]);
                    self.partial.extend_from_slice(&bytes[1..=len]);
                    while let Some(pos) = self.partial.iter().position(|b| *b == b'\n') {
                        let line: Vec<u8> = self.partial.drain(..=pos).collect();
                        let text = String::from_utf8_lossy(&line).trim_end().to_string();
                        if text.is_empty() {
                            self.outbox.extend_from_slice(b"\r\n");
                        } else {
                            self.lines.push(text);
                            let reply = if self.replies.is_empty() { "{}" } else { self.replies.remove(0) };
                            self.outbox.extend_from_slice(reply.as_bytes());
                            self.outbox.extend_from_slice(b"\r\n");
                        }
                    }
                }
                Operation::Read(buf) => {
                    let n = usize::from(self.query.take().ok_or(ErrorKind::Other)?);
                    buf[1] = n as u8;
                    for (i, b) in self.outbox.drain(..n).enumerate() {
                        buf[2 + i] = b;
                    }
                    buf[0] = self.outbox.len().min(255) as u8;
                }
            }
        }
        Ok(())
    }
}

/// Delay that returns immediately and counts milliseconds requested.
pub struct CountingDelay {
    pub total_ms: u64,
}

impl CountingDelay {
    pub fn new() -> Self {
        Self { total_ms: 0 }
    }
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ms += u64::from(ns) / 1_000_000;
    }
}
