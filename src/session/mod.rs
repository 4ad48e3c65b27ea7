mod session_runner;

use serde::Deserialize;

use crate::models::Field;
use crate::types::TransferId;

pub use session_runner::SessionRunner;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionAction {
    Set,
    Advance,
    Retreat,
    Edit,
    Confirm
}

/// One row of a session script: a single thing the sender did.
///
/// `field` and `value` are only read for `set`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionEvent {
    pub action: SessionAction,
    pub field: Option<Field>,
    pub value: Option<String>
}

/// What became of a single event.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EventOutcome {
    Applied,
    Refused,
    Submitted(TransferId)
}

/// Tally of a replayed session.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SessionReport {
    pub applied: usize,
    pub refused: usize,
    pub submitted: Vec<TransferId>
}

impl SessionReport {
    fn record(&mut self, outcome: EventOutcome) {
        match outcome {
            EventOutcome::Applied => self.applied += 1,
            EventOutcome::Refused => self.refused += 1,
            EventOutcome::Submitted(transfer_id) => {
                self.applied += 1;
                self.submitted.push(transfer_id);
            }
        }
    }
}
