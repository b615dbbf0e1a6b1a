use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Container condition / classification code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Empty,
    B,
    T,
    Lastcast,
    Module,
    SevenPc,
    Adr,
    NotAdr,
}

impl Status {
    pub const ALL: [Status; 8] = [
        Status::Empty,
        Status::B,
        Status::T,
        Status::Lastcast,
        Status::Module,
        Status::SevenPc,
        Status::Adr,
        Status::NotAdr,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Status::Empty => "empty",
            Status::B => "B",
            Status::T => "T",
            Status::Lastcast => "lastcast",
            Status::Module => "module",
            Status::SevenPc => "7pc",
            Status::Adr => "ADR",
            Status::NotAdr => "Ikke ADR",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.split_whitespace().collect::<Vec<_>>().join(" ");
        Self::ALL
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(&normalized))
    }

    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(Status::code).collect()
    }

    /// Dangerous-goods classification.
    pub fn is_adr(&self) -> bool {
        matches!(self, Status::Adr)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Status {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Status::from_code(s).ok_or_else(|| {
            AppError::InvalidStatus(format!(
                "'{}'. Valid statuses: {}",
                s,
                Status::codes().join(", ")
            ))
        })
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
