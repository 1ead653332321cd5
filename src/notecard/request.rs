//! Notecard JSON requests and responses.
//!
//! Every request is one JSON object on one line: `{"req":"<name>",...}\n`.
//! The Notecard answers with one JSON object on one line; a response that
//! carries an `err` field means the request was rejected.
//!
//! ```text
//! >> {"req":"hub.set","product":"com.example.marine:bilge_alarm","mode":"minimum","sn":"bilge-alarm"}
//! << {}
//! >> {"req":"note.add","sync":true,"body":{"ALARM":1}}
//! << {"total":1}
//! ```

use serde::{Deserialize, Serialize};

use crate::config::HubMode;

/// `hub.set`: claim the device under a Notehub product and pick a sync mode.
#[derive(Debug, Clone, Serialize)]
pub struct HubSet<'a> {
    req: &'static str,
    pub product: &'a str,
    pub mode: HubMode,
    pub sn: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<UserAgent<'a>>,
}

impl<'a> HubSet<'a> {
    pub fn new(product: &'a str, mode: HubMode, sn: &'a str) -> Self {
        Self {
            req: "hub.set",
            product,
            mode,
            sn,
            body: None,
        }
    }

    /// Report `agent` to Notehub alongside the hub settings.
    pub fn with_agent(mut self, agent: &'a str) -> Self {
        self.body = Some(UserAgent { agent });
        self
    }
}

/// User agent carried in the `hub.set` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserAgent<'a> {
    pub agent: &'a str,
}

/// Body of the alarm note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlarmBody {
    #[serde(rename = "ALARM")]
    pub alarm: u8,
}

/// `note.add`: queue a note, optionally forcing an immediate sync.
#[derive(Debug, Clone, Serialize)]
pub struct NoteAdd<B> {
    req: &'static str,
    pub sync: bool,
    pub body: B,
}

impl<B: Serialize> NoteAdd<B> {
    pub fn new(body: B, sync: bool) -> Self {
        Self {
            req: "note.add",
            sync,
            body,
        }
    }
}

/// The fields of a Notecard response this firmware looks at.
/// Everything else in the object is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub total: Option<u32>,
}

impl Response {
    pub fn is_error(&self) -> bool {
        self.err.is_some()
    }
}
