//! Caller-visible lifecycle of the engine's single compression slot.

use serde::{Deserialize, Serialize};

/// State of the one compression a [`Recompressor`](crate::Recompressor)
/// runs at a time.
///
/// The host reads it to disable its trigger control while `Running` and to
/// render the last outcome afterwards. `Done` and `Failed` describe the
/// most recent request; a new request moves the state back through
/// `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobState {
    /// No request has run yet
    Idle,
    /// A request is in flight
    Running,
    /// The last request wrote its output
    Done,
    /// The last request failed
    Failed,
}

impl JobState {
    /// The boolean busy flag: true while a compression is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// True once a request has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}
