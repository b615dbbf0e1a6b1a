use super::outcome::OpReport;
use crate::models::ContainerRecord;
use crate::store::EditSession;

/// Snapshot pulled by the presentation layer after each action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Display order; the position is the index used by edit and delete.
    pub records: Vec<ContainerRecord>,
    pub edit: Option<EditSession>,
    pub last: Option<OpReport>,
}

impl ViewModel {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, &ContainerRecord)> {
        self.records.iter().enumerate()
    }

    pub fn is_editing(&self, index: usize) -> bool {
        self.edit.as_ref().is_some_and(|s| s.index == index)
    }
}
