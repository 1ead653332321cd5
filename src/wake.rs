//! ISR → worker wake-up.
//!
//! The alarm ISR is the single producer, the main task is the single
//! consumer.  There is no queue: the worker only needs to know *that* the
//! pin changed, it re-reads the level itself.  Wakes raised while the
//! worker is busy coalesce into one pending wake, so a change that lands
//! mid-report is still picked up on the next iteration.
//!
//! ```text
//! ┌─────────────┐  wake()   ┌──────────────┐  wait()   ┌──────────────┐
//! │  GPIO ISR   │─────────▶│  WakeSignal  │─────────▶│ Worker loop  │
//! │ (debounced) │           │ (1 pending)  │           │ (main task)  │
//! └─────────────┘           └──────────────┘           └──────────────┘
//! ```
//!
//! - **`target_os = "espidf"`** — FreeRTOS direct-to-task notification on
//!   the registered worker task handle.
//! - **host** — `embassy-sync` [`Signal`] driven by `futures-lite`'s
//!   `block_on`.

#[cfg(target_os = "espidf")]
use core::ffi::c_void;
#[cfg(target_os = "espidf")]
use core::sync::atomic::{AtomicPtr, Ordering};

#[cfg(not(target_os = "espidf"))]
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
#[cfg(not(target_os = "espidf"))]
use embassy_sync::signal::Signal;

pub struct WakeSignal {
    #[cfg(target_os = "espidf")]
    worker: AtomicPtr<c_void>,
    #[cfg(not(target_os = "espidf"))]
    signal: Signal<CriticalSectionRawMutex, ()>,
}

impl Default for WakeSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "espidf")]
impl WakeSignal {
    pub const fn new() -> Self {
        Self {
            worker: AtomicPtr::new(core::ptr::null_mut()),
        }
    }

    /// Make the calling task the wake target.  Returns `false` if the
    /// scheduler has no current task (called before it started).
    pub fn register_current(&self) -> bool {
        match esp_idf_svc::hal::task::current() {
            Some(handle) => {
                self.worker.store(handle.cast(), Ordering::Release);
                true
            }
            None => false,
        }
    }

    /// Wake the worker.  Safe to call from ISR context.
    /// Returns `false` if no worker has been registered yet.
    pub fn wake(&self) -> bool {
        let handle = self.worker.load(Ordering::Acquire);
        if handle.is_null() {
            return false;
        }
        // SAFETY: the handle was obtained from `task::current()` for the
        // main task, which lives for the whole program.
        let _ = unsafe {
            esp_idf_svc::hal::task::notify_and_yield(handle.cast(), core::num::NonZeroU32::MIN)
        };
        true
    }

    /// Block the calling (worker) task until the next wake.
    pub fn wait(&self) {
        while esp_idf_svc::hal::task::wait_notification(esp_idf_svc::hal::delay::BLOCK).is_none() {}
    }

    /// Consume a pending wake without blocking.
    pub fn try_take(&self) -> bool {
        esp_idf_svc::hal::task::wait_notification(0).is_some()
    }
}

#[cfg(not(target_os = "espidf"))]
impl WakeSignal {
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    /// No task handles on the host; any thread may wait.
    pub fn register_current(&self) -> bool {
        true
    }

    pub fn wake(&self) -> bool {
        self.signal.signal(());
        true
    }

    pub fn wait(&self) {
        futures_lite::future::block_on(self.signal.wait());
    }

    pub fn try_take(&self) -> bool {
        self.signal.try_take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.signal.signaled()
    }
}
