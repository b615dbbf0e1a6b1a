use crate::models::ContainerRecord;
use serde::Serialize;

/// Flat, string-formatted row for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub index: usize,
    pub date: String,
    pub port: String,
    pub container_number: String,
    pub status: String,
    pub arrival_time: String,
    pub comment: String,
}

impl RecordExport {
    pub fn from_record(index: usize, rec: &ContainerRecord) -> Self {
        Self {
            index,
            date: rec.date_str(),
            port: rec.port.label().to_string(),
            container_number: rec.container_number.clone(),
            status: rec.status.code().to_string(),
            arrival_time: rec.time_str(),
            comment: rec.comment.clone(),
        }
    }
}

pub(crate) fn to_exports(records: &[ContainerRecord]) -> Vec<RecordExport> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| RecordExport::from_record(i, r))
        .collect()
}
