//! AlarmService integration tests against the mock ports.

use bilgealarm::app::events::AppEvent;
use bilgealarm::app::ports::AlarmState;
use bilgealarm::app::service::AlarmService;
use bilgealarm::config::{AlarmConfig, HubMode, PRODUCT_UID, SERIAL_NUMBER, USER_AGENT, fixed};
use bilgealarm::error::{Error, GpioError};
use bilgealarm::notecard::NotecardError;

use crate::mock_hw::{MockHardware, MockRelay, RecordingSink, RelayCall};

fn service() -> AlarmService {
    AlarmService::new(AlarmConfig::default())
}

// ── start ─────────────────────────────────────────────────────

#[test]
fn start_configures_hub_once() {
    let mut app = service();
    let mut relay = MockRelay::new();
    let mut sink = RecordingSink::new();

    app.start(&mut relay, &mut sink).unwrap();

    assert_eq!(
        relay.calls,
        vec![RelayCall::ConfigureHub {
            product: PRODUCT_UID.to_string(),
            sn: SERIAL_NUMBER.to_string(),
            mode: HubMode::Minimum,
            agent: USER_AGENT.map(str::to_string),
        }]
    );
    assert_eq!(sink.events, vec![AppEvent::Started]);
}

#[test]
fn start_passes_configured_user_agent() {
    let config = AlarmConfig {
        user_agent: fixed("bilge-alarm-esp32s3"),
        ..AlarmConfig::default()
    };
    let mut app = AlarmService::new(config);
    let mut relay = MockRelay::new();
    let mut sink = RecordingSink::new();

    app.start(&mut relay, &mut sink).unwrap();

    match &relay.calls[0] {
        RelayCall::ConfigureHub { agent, .. } => {
            assert_eq!(agent.as_deref(), Some("bilge-alarm-esp32s3"));
        }
        other => panic!("expected hub config, got {other:?}"),
    }
}

#[test]
fn start_failure_is_returned() {
    let mut app = service();
    let mut relay = MockRelay::new();
    relay.fail_with = Some(NotecardError::Timeout);
    let mut sink = RecordingSink::new();

    assert_eq!(app.start(&mut relay, &mut sink), Err(Error::Notecard(NotecardError::Timeout)));
    assert_eq!(sink.events, vec![AppEvent::HubConfigFailed(NotecardError::Timeout)]);
    assert_eq!(relay.calls.len(), 1);
}

// ── handle_wake ───────────────────────────────────────────────

#[test]
fn wake_mirrors_level_and_reports_it() {
    let mut app = service();
    let mut hw = MockHardware::new();
    let mut relay = MockRelay::new();
    let mut sink = RecordingSink::new();

    hw.level = true;
    let outcome = app.handle_wake(&mut hw, &mut relay, &mut sink);

    assert_eq!(outcome.state, Some(AlarmState::Active));
    assert!(outcome.indicator_ok);
    assert!(outcome.reported);
    assert!(hw.led_on());
    assert_eq!(
        relay.calls,
        vec![RelayCall::Report {
            state: AlarmState::Active,
            sync: true,
        }]
    );
    assert_eq!(
        sink.events,
        vec![
            AppEvent::AlarmChanged(AlarmState::Active),
            AppEvent::ReportSent(AlarmState::Active),
        ]
    );
}

#[test]
fn rise_then_fall_reports_both() {
    let mut app = service();
    let mut hw = MockHardware::new();
    let mut relay = MockRelay::new();
    let mut sink = RecordingSink::new();

    hw.level = true;
    app.handle_wake(&mut hw, &mut relay, &mut sink);
    hw.level = false;
    app.handle_wake(&mut hw, &mut relay, &mut sink);

    assert_eq!(relay.reports(), vec![AlarmState::Active, AlarmState::Clear]);
    assert_eq!(hw.indicator, vec![AlarmState::Active, AlarmState::Clear]);
    assert!(!hw.led_on());

    let stats = app.stats();
    assert_eq!(stats.wakes, 2);
    assert_eq!(stats.reports_sent, 2);
    assert_eq!(stats.last_state, Some(AlarmState::Clear));
}

#[test]
fn same_level_twice_is_still_reported_twice() {
    let mut app = service();
    let mut hw = MockHardware::new();
    let mut relay = MockRelay::new();
    let mut sink = RecordingSink::new();

    hw.level = true;
    app.handle_wake(&mut hw, &mut relay, &mut sink);
    app.handle_wake(&mut hw, &mut relay, &mut sink);

    assert_eq!(relay.reports(), vec![AlarmState::Active, AlarmState::Active]);
}

#[test]
fn indicator_failure_does_not_block_report() {
    let mut app = service();
    let mut hw = MockHardware::new();
    hw.level = true;
    hw.write_fails = true;
    let mut relay = MockRelay::new();
    let mut sink = RecordingSink::new();

    let outcome = app.handle_wake(&mut hw, &mut relay, &mut sink);

    assert!(!outcome.indicator_ok);
    assert!(outcome.reported);
    assert_eq!(relay.reports(), vec![AlarmState::Active]);
    assert!(sink.events.contains(&AppEvent::IndicatorFailed(GpioError::WriteFailed(2))));
    assert_eq!(app.stats().indicator_failures, 1);
}

#[test]
fn report_failure_is_logged_and_not_retried() {
    let mut app = service();
    let mut hw = MockHardware::new();
    hw.level = true;
    let mut relay = MockRelay::new();
    relay.fail_with = Some(NotecardError::Bus);
    let mut sink = RecordingSink::new();

    let outcome = app.handle_wake(&mut hw, &mut relay, &mut sink);

    assert!(!outcome.reported);
    assert_eq!(relay.calls.len(), 1);
    assert!(hw.led_on());
    assert_eq!(sink.events.last(), Some(&AppEvent::ReportFailed(NotecardError::Bus)));

    // The next wake tries again, once.
    relay.fail_with = None;
    let outcome = app.handle_wake(&mut hw, &mut relay, &mut sink);
    assert!(outcome.reported);
    assert_eq!(relay.calls.len(), 2);

    let stats = app.stats();
    assert_eq!(stats.reports_failed, 1);
    assert_eq!(stats.reports_sent, 1);
}

#[test]
fn read_failure_skips_indicator_and_report() {
    let mut app = service();
    let mut hw = MockHardware::new();
    hw.read_fails = true;
    let mut relay = MockRelay::new();
    let mut sink = RecordingSink::new();

    let outcome = app.handle_wake(&mut hw, &mut relay, &mut sink);

    assert_eq!(outcome.state, None);
    assert!(!outcome.reported);
    assert!(hw.indicator.is_empty());
    assert!(relay.calls.is_empty());
    assert_eq!(sink.events, vec![AppEvent::InputReadFailed(GpioError::ReadFailed(4))]);
    assert_eq!(app.stats().read_failures, 1);
}

#[test]
fn note_sync_flag_follows_config() {
    let config = AlarmConfig {
        note_sync: false,
        ..AlarmConfig::default()
    };
    let mut app = AlarmService::new(config);
    let mut hw = MockHardware::new();
    let mut relay = MockRelay::new();
    let mut sink = RecordingSink::new();

    app.handle_wake(&mut hw, &mut relay, &mut sink);

    assert_eq!(
        relay.calls,
        vec![RelayCall::Report {
            state: AlarmState::Clear,
            sync: false,
        }]
    );
}
