//! Text rendering of the view model: the entries table and the edit form.

use super::labels::Labels;
use crate::core::ViewModel;
use crate::models::{ContainerRecord, RecordFields};
use crate::utils::formatting::pad_right;
use crate::utils::table::{Column, Table};
use crate::utils::{date, time};
use ansi_term::Colour;

pub struct RenderOptions {
    pub comment_width: usize,
    pub separator: char,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            comment_width: 40,
            separator: '-',
            color: true,
        }
    }
}

fn status_cell(rec: &ContainerRecord, color: bool) -> String {
    if color && rec.status.is_adr() {
        Colour::Red.paint(rec.status.code()).to_string()
    } else {
        rec.status.code().to_string()
    }
}

/// Entries table, or the "no entries" message when the store is empty.
pub fn render_table(view: &ViewModel, labels: &Labels, opts: &RenderOptions) -> String {
    if view.is_empty() {
        return format!("{}\n", labels.no_entries);
    }

    let mut columns = vec![Column::new("#")];
    columns.extend(labels.field_headers().into_iter().map(Column::new));
    let mut table = Table::new(columns).with_separator(opts.separator);

    for (i, rec) in view.rows() {
        let marker = if view.is_editing(i) { "*" } else { "" };
        let comment = textwrap::wrap(&rec.comment, opts.comment_width.max(1)).join("\n");
        table.add_row(vec![
            format!("{i}{marker}"),
            rec.date_str(),
            rec.port.to_string(),
            rec.container_number.clone(),
            status_cell(rec, opts.color),
            rec.time_str(),
            comment,
        ]);
    }

    table.render()
}

/// Staged values of an edit session, one labeled line per field.
pub fn render_staged(index: usize, staged: &RecordFields, labels: &Labels) -> String {
    let date = staged
        .date
        .map(|d| date::format_date(&d))
        .unwrap_or_default();
    let values = [
        date,
        staged.port.to_string(),
        staged.container_number.clone(),
        staged.status.to_string(),
        time::format_time(&staged.arrival_time),
        staged.comment.clone(),
    ];

    let headers = labels.field_headers();
    let width = headers
        .iter()
        .map(|h| crate::utils::formatting::visible_width(h))
        .max()
        .unwrap_or(0);

    let mut out = format!("{} #{index}\n", labels.edit_header);
    for (h, v) in headers.iter().zip(values) {
        out.push_str(&format!("  {} : {}\n", pad_right(h, width), v));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ledger;
    use crate::models::{Port, Status};
    use crate::ui::labels::Language;
    use crate::utils::formatting::strip_ansi;
    use chrono::{NaiveDate, NaiveTime};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn plain() -> RenderOptions {
        RenderOptions {
            color: false,
            ..Default::default()
        }
    }

    #[test]
    fn empty_view_shows_message() {
        let ledger = Ledger::with_clock(day);
        let labels = Labels::for_language(Language::En);
        assert!(render_table(&ledger.view(), &labels, &plain()).contains("No container entries yet"));
    }

    #[test]
    fn table_lists_rows_with_index_and_edit_marker() {
        let ledger = Ledger::with_clock(day);
        let t = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        ledger.submit_entry(&RecordFields::new(Port::Alesund, "C1", Status::Empty, t));
        ledger.submit_entry(&RecordFields::new(Port::Forde, "C2", Status::Adr, t));
        ledger.begin_edit(1).unwrap();

        let labels = Labels::for_language(Language::Hr);
        let out = strip_ansi(&render_table(&ledger.view(), &labels, &RenderOptions::default()));
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("#  Datum"));
        assert!(lines[0].contains("Vrijeme dolaska"));
        assert!(lines[2].starts_with("0  2025-09-01 Ålesund C1"));
        assert!(lines[3].starts_with("1* 2025-09-01 Førde"));
        assert!(lines[3].contains("ADR"));
    }

    #[test]
    fn long_comments_wrap() {
        let ledger = Ledger::with_clock(day);
        let t = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        ledger.submit_entry(
            &RecordFields::new(Port::Molde, "C1", Status::B, t)
                .with_comment("seal checked and door damaged on arrival"),
        );

        let opts = RenderOptions {
            comment_width: 20,
            ..plain()
        };
        let labels = Labels::for_language(Language::En);
        let out = render_table(&ledger.view(), &labels, &opts);
        assert_eq!(out.lines().count(), 2 + 3);
    }

    #[test]
    fn staged_form_lists_every_field() {
        let staged = RecordFields::new(
            Port::Molde,
            "C2",
            Status::Adr,
            NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
        )
        .with_date(day());
        let out = render_staged(0, &staged, &Labels::for_language(Language::En));

        assert!(out.starts_with("✏️ Edit Container Entry #0"));
        assert!(out.contains("Port             : Molde"));
        assert!(out.contains("Arrival Time     : 09:15"));
        assert_eq!(out.lines().count(), 7);
    }
}
