//! Software debounce for edge-triggered GPIO interrupts.
//!
//! Mechanical float switches chatter for tens to hundreds of milliseconds
//! when they change position.  Every edge interrupt calls
//! [`Debouncer::on_edge`]; only an edge that arrives after a quiet period
//! longer than the window is allowed through.
//!
//! ```text
//!  edges:   |  | |||  |               |||  |
//!  time:    0  ...  480               1200 ...
//!  wake:    (suppressed: boot)        ^ first edge after >window quiet
//! ```
//!
//! The last-event timestamp is updated on *every* edge, including the
//! suppressed ones, so a continuously bouncing line keeps extending the
//! quiet requirement.  Timestamps are `u32` milliseconds since boot (see
//! [`ms_timestamp`]) and all arithmetic is wrapping (no 64-bit atomics on
//! Xtensa).
//!
//! The counter wraps every 2^32 ms, about 49.7 days.  Two edges whose real
//! spacing is within one window of a whole number of wraps therefore look
//! like a bounce, and the second one is suppressed.  A level change is
//! still picked up by the next edge after a quiet window.

use core::sync::atomic::{AtomicU32, Ordering};

/// Default quiet window between accepted edges.
pub const DEFAULT_WINDOW_MS: u32 = 500;

/// Debounce timestamp for a microsecond uptime: milliseconds, truncated to
/// `u32`.  The ISR and the time adapter both go through this.
pub const fn ms_timestamp(uptime_us: u64) -> u32 {
    (uptime_us / 1_000) as u32
}

/// Lock-free edge debouncer.  Safe to share between an ISR and the main task.
pub struct Debouncer {
    last_edge_ms: AtomicU32,
    window_ms: AtomicU32,
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            last_edge_ms: AtomicU32::new(0),
            window_ms: AtomicU32::new(window_ms),
        }
    }

    /// Record an edge at `now_ms`.
    ///
    /// Returns `true` if more than the window has elapsed since the previous
    /// edge, i.e. the caller should act on this one.
    pub fn on_edge(&self, now_ms: u32) -> bool {
        let last = self.last_edge_ms.swap(now_ms, Ordering::AcqRel);
        now_ms.wrapping_sub(last) > self.window_ms.load(Ordering::Relaxed)
    }

    pub fn set_window(&self, window_ms: u32) {
        self.window_ms.store(window_ms, Ordering::Relaxed);
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms.load(Ordering::Relaxed)
    }

    /// Timestamp of the most recent edge, accepted or not.
    pub fn last_edge_ms(&self) -> u32 {
        self.last_edge_ms.load(Ordering::Acquire)
    }

    /// Forget the last edge (back to the power-on state).
    pub fn reset(&self) {
        self.last_edge_ms.store(0, Ordering::Release);
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS)
    }
}
