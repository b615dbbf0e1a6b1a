use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Harbors where arrivals are logged. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Port {
    #[default]
    Alesund,
    Stavanger,
    Haugesund,
    Molde,
    Forde,
    Trondheim,
}

impl Port {
    pub const ALL: [Port; 6] = [
        Port::Alesund,
        Port::Stavanger,
        Port::Haugesund,
        Port::Molde,
        Port::Forde,
        Port::Trondheim,
    ];

    /// Display label, as shown in the form and stored in exports.
    pub fn label(&self) -> &'static str {
        match self {
            Port::Alesund => "Ålesund",
            Port::Stavanger => "Stavanger",
            Port::Haugesund => "Haugesund",
            Port::Molde => "Molde",
            Port::Forde => "Førde",
            Port::Trondheim => "Trondheim",
        }
    }

    /// Parse a label typed by the user.
    ///
    /// Matching is case-insensitive; `Alesund` and `Forde` are accepted as
    /// ASCII spellings. Anything else is rejected.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ålesund" | "alesund" | "aalesund" => Some(Port::Alesund),
            "stavanger" => Some(Port::Stavanger),
            "haugesund" => Some(Port::Haugesund),
            "molde" => Some(Port::Molde),
            "førde" | "forde" => Some(Port::Forde),
            "trondheim" => Some(Port::Trondheim),
            _ => None,
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Port::label).collect()
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Port {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Port::from_label(s).ok_or_else(|| {
            AppError::InvalidPort(format!(
                "'{}'. Valid ports: {}",
                s,
                Port::labels().join(", ")
            ))
        })
    }
}

impl Serialize for Port {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Port {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
