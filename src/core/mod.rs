//! Record-management workflows: entry, edit and delete over the store.

pub mod add;
pub mod del;
pub mod edit;
pub mod ledger;
pub mod log;
pub mod outcome;
pub mod view;

pub use ledger::{Ledger, LedgerState};
pub use outcome::{OpReport, OpStatus, Operation, Outcome, Rejection};
pub use view::ViewModel;
