use super::model::RecordExport;
use crate::errors::AppResult;
use std::io::Write;

pub(crate) fn write_json<W: Write>(out: W, rows: &[RecordExport]) -> AppResult<()> {
    serde_json::to_writer_pretty(out, rows)?;
    Ok(())
}

pub(crate) fn write_csv<W: Write>(out: W, rows: &[RecordExport]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    if rows.is_empty() {
        // serialize() only writes headers with the first row
        wtr.write_record([
            "index",
            "date",
            "port",
            "container_number",
            "status",
            "arrival_time",
            "comment",
        ])?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
