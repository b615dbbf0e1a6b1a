use super::ledger::LedgerState;
use super::outcome::{Outcome, Rejection};
use crate::models::{ContainerRecord, RecordFields};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Business logic for new entries.
pub struct EntryLogic;

impl EntryLogic {
    /// Validate `fields` and append a record built from them.
    ///
    /// An empty container number is a no-op reported as
    /// `Rejected(EmptyIdentifier)`; the store is left untouched.
    pub fn apply(state: &mut LedgerState, fields: &RecordFields, today: NaiveDate) -> Outcome {
        if !fields.has_identifier() {
            warn!("entry rejected: empty container number");
            return Outcome::Rejected(Rejection::EmptyIdentifier);
        }

        let record = ContainerRecord::from_fields(fields, today);
        let index = state.store.len();
        let message = format!(
            "{} at {} ({}) {} {}",
            record.container_number,
            record.port,
            record.status,
            record.date_str(),
            record.time_str()
        );

        state.store.append(record);
        state.journal.push("add", &format!("#{index}"), &message);
        info!(index, "record added: {message}");

        Outcome::Applied
    }
}
