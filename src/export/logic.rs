use super::ExportFormat;
use super::fs_utils::ensure_writable;
use super::json_csv::{write_csv, write_json};
use super::model::to_exports;
use crate::errors::AppResult;
use crate::models::ContainerRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `out` in display order.
    pub fn write<W: Write>(out: W, format: ExportFormat, records: &[ContainerRecord]) -> AppResult<()> {
        let rows = to_exports(records);
        match format {
            ExportFormat::Csv => write_csv(out, &rows),
            ExportFormat::Json => write_json(out, &rows),
        }
    }

    /// Export to `path`. Returns the number of records written.
    pub fn export(
        path: &Path,
        format: ExportFormat,
        records: &[ContainerRecord],
        force: bool,
        confirm: &mut dyn FnMut(&str) -> bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force, confirm)?;

        let mut out = BufWriter::new(File::create(path)?);
        Self::write(&mut out, format, records)?;
        out.flush()?;

        tracing::info!(path = %path.display(), format = format.as_str(), count = records.len(), "export written");
        Ok(records.len())
    }
}
