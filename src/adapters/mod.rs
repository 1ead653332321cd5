//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter          | Implements         | Connects to              |
//! |------------------|--------------------|--------------------------|
//! | `hardware`       | AlarmInputPort     | ESP32 GPIO (alarm pin)   |
//! |                  | IndicatorPort      | ESP32 GPIO (LED)         |
//! | `log_sink`       | EventSink          | Serial log output        |
//! | `notecard_relay` | CloudRelayPort     | Notecard over I²C        |
//! | `time`           | —                  | ESP32 system timer       |

pub mod hardware;
pub mod log_sink;
pub mod notecard_relay;
pub mod time;
