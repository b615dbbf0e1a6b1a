use super::ledger::LedgerState;
use super::outcome::{Outcome, Rejection};
use crate::errors::{AppError, AppResult};
use crate::models::{ContainerRecord, RecordFields, RecordPatch};
use crate::store::EditSession;
use tracing::{debug, info, warn};

/// Edit workflow: Idle (no session) ⇄ Editing (session holds an index).
pub struct EditLogic;

impl EditLogic {
    /// Idle/Editing → Editing. A session already open is replaced.
    pub fn begin(state: &mut LedgerState, index: usize) -> AppResult<RecordFields> {
        let staged = state.store.get(index)?.to_fields();

        if let Some(prev) = state.session.replace(EditSession::new(index, staged.clone())) {
            debug!(from = prev.index, to = index, "edit session replaced");
        }

        state
            .journal
            .push("edit", &format!("#{index}"), &staged.container_number);
        info!(index, "edit session started");

        Ok(staged)
    }

    /// Overwrite staged values without touching the store.
    pub fn stage(state: &mut LedgerState, patch: &RecordPatch) -> AppResult<RecordFields> {
        let session = state.session.as_mut().ok_or(AppError::NoActiveEdit)?;
        session.staged = patch.apply_to(&session.staged);
        debug!(index = session.index, "staged values updated");
        Ok(session.staged.clone())
    }

    /// Editing → Idle, writing `staged` into the record.
    ///
    /// An empty container number keeps the session open and leaves the
    /// store untouched.
    pub fn commit(state: &mut LedgerState, staged: &RecordFields) -> AppResult<Outcome> {
        let index = state
            .session
            .as_ref()
            .map(|s| s.index)
            .ok_or(AppError::NoActiveEdit)?;

        if !staged.has_identifier() {
            warn!(index, "save rejected: empty container number");
            return Ok(Outcome::Rejected(Rejection::EmptyIdentifier));
        }

        let current_date = match state.store.get(index) {
            Ok(rec) => rec.date,
            Err(e) => {
                // target vanished without reconciliation
                state.session = None;
                return Err(e);
            }
        };

        let record = ContainerRecord::from_fields(staged, current_date);
        let message = format!(
            "{} at {} ({}) {} {}",
            record.container_number,
            record.port,
            record.status,
            record.date_str(),
            record.time_str()
        );

        state.store.update(index, record)?;
        state.session = None;
        state.journal.push("save", &format!("#{index}"), &message);
        info!(index, "record updated: {message}");

        Ok(Outcome::Applied)
    }

    /// Editing → Idle, discarding staged values.
    pub fn cancel(state: &mut LedgerState) -> AppResult<()> {
        let session = state.session.take().ok_or(AppError::NoActiveEdit)?;
        state
            .journal
            .push("cancel", &format!("#{}", session.index), "staged changes discarded");
        info!(index = session.index, "edit session cancelled");
        Ok(())
    }
}
