use super::ledger::LedgerState;
use crate::errors::AppResult;
use crate::models::ContainerRecord;
use crate::store::session::Reconcile;
use tracing::{info, warn};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the record at `index` and reconcile an open edit session.
    ///
    /// A session on the removed record is invalidated; one on a later record
    /// follows it down by one position.
    pub fn apply(state: &mut LedgerState, index: usize) -> AppResult<ContainerRecord> {
        let removed = state.store.remove(index)?;

        state.journal.push(
            "del",
            &format!("#{index}"),
            &format!("{} at {}", removed.container_number, removed.port),
        );
        info!(index, container = %removed.container_number, "record deleted");

        let reconcile = state
            .session
            .as_mut()
            .map(|s| s.on_removed(index))
            .unwrap_or(Reconcile::Unaffected);

        match reconcile {
            Reconcile::Invalidated => {
                state.session = None;
                state.journal.push(
                    "edit_invalidated",
                    &format!("#{index}"),
                    "record under edit was deleted",
                );
                warn!(index, "edit session invalidated by delete");
            }
            Reconcile::Repointed { from, to } => {
                state.journal.push(
                    "edit_repointed",
                    &format!("#{from} -> #{to}"),
                    "record under edit moved after delete",
                );
                info!(from, to, "edit session re-pointed");
            }
            Reconcile::Unaffected => {}
        }

        Ok(removed)
    }
}
