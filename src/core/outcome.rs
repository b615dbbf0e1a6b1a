use crate::errors::AppError;
use std::fmt;

/// Result code of a workflow that may refuse its input without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Container number empty after trimming.
    EmptyIdentifier,
}

impl Rejection {
    /// Stricter UIs report the rejection as an error.
    pub fn into_error(self) -> AppError {
        match self {
            Rejection::EmptyIdentifier => AppError::EmptyIdentifier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    BeginEdit,
    Stage,
    Save,
    Cancel,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::BeginEdit => "edit",
            Operation::Stage => "set",
            Operation::Save => "save",
            Operation::Cancel => "cancel",
            Operation::Delete => "del",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpStatus {
    Success,
    NotApplied(Rejection),
    IndexOutOfRange { index: usize, len: usize },
    NoActiveEdit,
}

/// What the last operation did, for user feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpReport {
    pub op: Operation,
    pub status: OpStatus,
}

impl OpReport {
    pub fn from_outcome(op: Operation, outcome: Outcome) -> Self {
        let status = match outcome {
            Outcome::Applied => OpStatus::Success,
            Outcome::Rejected(r) => OpStatus::NotApplied(r),
        };
        Self { op, status }
    }

    /// `None` for errors that are not part of the reported taxonomy.
    pub fn from_error(op: Operation, err: &AppError) -> Option<Self> {
        let status = match err {
            AppError::IndexOutOfRange { index, len } => OpStatus::IndexOutOfRange {
                index: *index,
                len: *len,
            },
            AppError::NoActiveEdit => OpStatus::NoActiveEdit,
            _ => return None,
        };
        Some(Self { op, status })
    }
}

impl fmt::Display for OpReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.op.as_str();
        match &self.status {
            OpStatus::Success => write!(f, "{op}: ok"),
            OpStatus::NotApplied(Rejection::EmptyIdentifier) => {
                write!(f, "{op}: not applied (empty container number)")
            }
            OpStatus::IndexOutOfRange { index, len } => {
                write!(f, "{op}: index {index} out of range (records: {len})")
            }
            OpStatus::NoActiveEdit => write!(f, "{op}: no active edit"),
        }
    }
}
