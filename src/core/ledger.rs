//! The single mutation boundary around the record store and edit session.
//!
//! Every workflow runs under one lock, start to finish. The presentation
//! layer pulls a fresh [`ViewModel`] after each action.

use super::add::EntryLogic;
use super::del::DeleteLogic;
use super::edit::EditLogic;
use super::outcome::{OpReport, OpStatus, Operation, Outcome};
use super::view::ViewModel;
use crate::errors::{AppError, AppResult};
use crate::models::{ContainerRecord, RecordFields, RecordPatch};
use crate::store::{EditSession, Journal, JournalEntry, RecordStore};
use crate::utils::date;
use chrono::NaiveDate;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// State guarded by the [`Ledger`] lock.
#[derive(Debug, Default)]
pub struct LedgerState {
    pub store: RecordStore,
    pub session: Option<EditSession>,
    pub journal: Journal,
    pub last: Option<OpReport>,
}

impl LedgerState {
    fn record<T>(&mut self, op: Operation, result: &AppResult<T>) {
        let report = match result {
            Ok(_) => Some(OpReport {
                op,
                status: OpStatus::Success,
            }),
            Err(e) => OpReport::from_error(op, e),
        };
        if report.is_some() {
            self.last = report;
        }
    }

    fn record_outcome(&mut self, op: Operation, result: &AppResult<Outcome>) {
        match result {
            Ok(outcome) => self.last = Some(OpReport::from_outcome(op, *outcome)),
            Err(_) => self.record(op, result),
        }
    }
}

pub struct Ledger {
    state: Mutex<LedgerState>,
    today: fn() -> NaiveDate,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_clock(date::today)
    }

    /// Use `today` to date entries submitted without an explicit date.
    pub fn with_clock(today: fn() -> NaiveDate) -> Self {
        Self {
            state: Mutex::new(LedgerState::default()),
            today,
        }
    }

    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        // workflows validate before mutating: a poisoned state is still consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ---------------------------
    // Workflows
    // ---------------------------

    pub fn submit_entry(&self, fields: &RecordFields) -> Outcome {
        let mut st = self.lock();
        let outcome = EntryLogic::apply(&mut st, fields, (self.today)());
        st.last = Some(OpReport::from_outcome(Operation::Add, outcome));
        outcome
    }

    pub fn begin_edit(&self, index: usize) -> AppResult<RecordFields> {
        let mut st = self.lock();
        let result = EditLogic::begin(&mut st, index);
        st.record(Operation::BeginEdit, &result);
        result
    }

    pub fn stage_edit(&self, patch: &RecordPatch) -> AppResult<RecordFields> {
        let mut st = self.lock();
        let result = EditLogic::stage(&mut st, patch);
        st.record(Operation::Stage, &result);
        result
    }

    pub fn commit_edit(&self, staged: &RecordFields) -> AppResult<Outcome> {
        let mut st = self.lock();
        let result = EditLogic::commit(&mut st, staged);
        st.record_outcome(Operation::Save, &result);
        result
    }

    /// Commit the session's staged values with `patch` applied on top.
    pub fn save_edit(&self, patch: &RecordPatch) -> AppResult<Outcome> {
        let mut st = self.lock();
        let staged = st.session.as_ref().map(|s| patch.apply_to(&s.staged));
        let result = match staged {
            Some(staged) => EditLogic::commit(&mut st, &staged),
            None => Err(AppError::NoActiveEdit),
        };
        st.record_outcome(Operation::Save, &result);
        result
    }

    pub fn cancel_edit(&self) -> AppResult<()> {
        let mut st = self.lock();
        let result = EditLogic::cancel(&mut st);
        st.record(Operation::Cancel, &result);
        result
    }

    /// Look up the record a delete would remove, before asking for
    /// confirmation. A stale index is reported as a failed delete.
    pub fn delete_target(&self, index: usize) -> AppResult<ContainerRecord> {
        let mut st = self.lock();
        let result = st.store.get(index).cloned();
        if result.is_err() {
            st.record(Operation::Delete, &result);
        }
        result
    }

    pub fn delete_record(&self, index: usize) -> AppResult<ContainerRecord> {
        let mut st = self.lock();
        let result = DeleteLogic::apply(&mut st, index);
        st.record(Operation::Delete, &result);
        result
    }

    // ---------------------------
    // Queries
    // ---------------------------

    pub fn view(&self) -> ViewModel {
        let st = self.lock();
        ViewModel {
            records: st.store.list().to_vec(),
            edit: st.session.clone(),
            last: st.last.clone(),
        }
    }

    pub fn records(&self) -> Vec<ContainerRecord> {
        self.lock().store.list().to_vec()
    }

    pub fn get(&self, index: usize) -> AppResult<ContainerRecord> {
        self.lock().store.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().store.is_empty()
    }

    pub fn edit_session(&self) -> Option<EditSession> {
        self.lock().session.clone()
    }

    pub fn last_report(&self) -> Option<OpReport> {
        self.lock().last.clone()
    }

    pub fn journal(&self) -> Vec<JournalEntry> {
        self.lock().journal.entries().to_vec()
    }
}
