//! Notecard relay adapter.
//!
//! Implements [`CloudRelayPort`] on top of the [`Notecard`] client: the
//! hub settings become a `hub.set` request, each alarm report becomes a
//! `note.add` with body `{"ALARM": 0|1}`.

use log::info;

use crate::app::ports::{AlarmState, CloudRelayPort, HubSettings};
use crate::notecard::{AlarmBody, HubSet, NoteAdd, Notecard, NotecardError, NotecardTransport};

pub struct NotecardRelay<T> {
    card: Notecard<T>,
}

impl<T: NotecardTransport> NotecardRelay<T> {
    pub fn new(transport: T) -> Self {
        Self {
            card: Notecard::new(transport),
        }
    }

    pub fn into_transport(self) -> T {
        self.card.into_transport()
    }
}

impl<T: NotecardTransport> CloudRelayPort for NotecardRelay<T> {
    fn configure_hub(&mut self, settings: &HubSettings<'_>) -> Result<(), NotecardError> {
        let mut req = HubSet::new(settings.product_uid, settings.mode, settings.serial_number);
        if let Some(agent) = settings.user_agent {
            req = req.with_agent(agent);
        }
        self.card.request(&req)?;
        Ok(())
    }

    fn report_alarm(&mut self, state: AlarmState, sync: bool) -> Result<(), NotecardError> {
        info!("Sending notecard request...");
        let req = NoteAdd::new(AlarmBody { alarm: state.as_u8() }, sync);
        self.card.request(&req)?;
        Ok(())
    }
}
