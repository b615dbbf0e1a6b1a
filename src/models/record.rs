use super::{port::Port, status::Status};
use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One logged container arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRecord {
    #[serde(with = "crate::utils::date::ymd")]
    pub date: NaiveDate, // "YYYY-MM-DD"
    pub port: Port,
    pub container_number: String, // trimmed, never empty
    pub status: Status,
    #[serde(with = "crate::utils::time::hhmm")]
    pub arrival_time: NaiveTime, // "HH:MM"
    pub comment: String,
}

impl ContainerRecord {
    /// Build a record from validated fields. `today` fills a missing date.
    ///
    /// The caller is responsible for the container number check
    /// (see [`RecordFields::has_identifier`]).
    pub fn from_fields(fields: &RecordFields, today: NaiveDate) -> Self {
        Self {
            date: fields.date.unwrap_or(today),
            port: fields.port,
            container_number: fields.container_number.trim().to_string(),
            status: fields.status,
            arrival_time: time::truncate_to_minute(fields.arrival_time),
            comment: fields.comment.clone(),
        }
    }

    /// Current values as a pre-populated form.
    pub fn to_fields(&self) -> RecordFields {
        RecordFields {
            date: Some(self.date),
            port: self.port,
            container_number: self.container_number.clone(),
            status: self.status,
            arrival_time: self.arrival_time,
            comment: self.comment.clone(),
        }
    }

    pub fn date_str(&self) -> String {
        date::format_date(&self.date)
    }

    pub fn time_str(&self) -> String {
        time::format_time(&self.arrival_time)
    }
}

/// Candidate field values submitted by an entry or edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    /// `None` means "today".
    pub date: Option<NaiveDate>,
    pub port: Port,
    pub container_number: String,
    pub status: Status,
    pub arrival_time: NaiveTime,
    pub comment: String,
}

impl RecordFields {
    pub fn new(port: Port, container_number: impl Into<String>, status: Status, arrival_time: NaiveTime) -> Self {
        Self {
            date: None,
            port,
            container_number: container_number.into(),
            status,
            arrival_time,
            comment: String::new(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// The only content rule: container number non-empty after trimming.
    pub fn has_identifier(&self) -> bool {
        !self.container_number.trim().is_empty()
    }
}

/// Per-field overrides applied on top of staged edit values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub date: Option<NaiveDate>,
    pub port: Option<Port>,
    pub container_number: Option<String>,
    pub status: Option<Status>,
    pub arrival_time: Option<NaiveTime>,
    pub comment: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        *self == RecordPatch::default()
    }

    pub fn apply_to(&self, base: &RecordFields) -> RecordFields {
        RecordFields {
            date: self.date.or(base.date),
            port: self.port.unwrap_or(base.port),
            container_number: self
                .container_number
                .clone()
                .unwrap_or_else(|| base.container_number.clone()),
            status: self.status.unwrap_or(base.status),
            arrival_time: self.arrival_time.unwrap_or(base.arrival_time),
            comment: self.comment.clone().unwrap_or_else(|| base.comment.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn from_fields_normalizes_values() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let fields = RecordFields::new(
            Port::Molde,
            "  MSKU1234567 ",
            Status::Adr,
            NaiveTime::from_hms_opt(9, 15, 59).unwrap(),
        );

        let rec = ContainerRecord::from_fields(&fields, today);
        assert_eq!(rec.date_str(), "2025-09-01");
        assert_eq!(rec.container_number, "MSKU1234567");
        assert_eq!(rec.time_str(), "09:15");
    }

    #[test]
    fn explicit_date_wins_over_today() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let chosen = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
        let fields = RecordFields::new(Port::Forde, "C1", Status::B, hm(7, 0)).with_date(chosen);
        assert_eq!(ContainerRecord::from_fields(&fields, today).date, chosen);
    }

    #[test]
    fn whitespace_only_identifier_is_missing() {
        let fields = RecordFields::new(Port::Molde, " \t ", Status::Empty, hm(8, 0));
        assert!(!fields.has_identifier());
    }

    #[test]
    fn serializes_canonical_formats() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let fields = RecordFields::new(Port::Alesund, "C1", Status::NotAdr, hm(8, 5));
        let rec = ContainerRecord::from_fields(&fields, today);

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["date"], "2025-09-01");
        assert_eq!(json["port"], "Ålesund");
        assert_eq!(json["status"], "Ikke ADR");
        assert_eq!(json["arrival_time"], "08:05");
    }

    #[test]
    fn patch_overrides_only_given_fields() {
        let base = RecordFields::new(Port::Molde, "C2", Status::Adr, hm(9, 15));
        let patch = RecordPatch {
            comment: Some("checked".into()),
            ..Default::default()
        };

        let out = patch.apply_to(&base);
        assert_eq!(out.comment, "checked");
        assert_eq!(out.container_number, "C2");
        assert_eq!(out.port, Port::Molde);
        assert!(RecordPatch::default().is_empty());
        assert!(!patch.is_empty());
    }
}
