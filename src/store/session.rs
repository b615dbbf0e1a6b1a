use crate::models::RecordFields;

/// The single record currently open for editing, with its staged values.
///
/// Holds the index, not the record: a delete elsewhere must reconcile it
/// through [`EditSession::on_removed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub index: usize,
    pub staged: RecordFields,
}

/// What happened to a session after a record was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    Unaffected,
    Repointed { from: usize, to: usize },
    Invalidated,
}

impl EditSession {
    pub fn new(index: usize, staged: RecordFields) -> Self {
        Self { index, staged }
    }

    /// Adjust the target after `removed` was deleted from the store.
    pub fn on_removed(&mut self, removed: usize) -> Reconcile {
        if self.index == removed {
            Reconcile::Invalidated
        } else if self.index > removed {
            let from = self.index;
            self.index -= 1;
            Reconcile::Repointed {
                from,
                to: self.index,
            }
        } else {
            Reconcile::Unaffected
        }
    }
}
