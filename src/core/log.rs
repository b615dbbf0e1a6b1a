use crate::store::JournalEntry;
use crate::utils::formatting::{strip_ansi, truncate};
use ansi_term::Colour;

/// Color per journal operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" | "save" => Colour::Yellow,
        "cancel" => Colour::Blue,
        "edit_invalidated" | "edit_repointed" => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the journal, one colored line per entry.
    pub fn render(entries: &[JournalEntry]) -> String {
        if entries.is_empty() {
            return String::new();
        }

        let op_targets: Vec<String> = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                }
            })
            .collect();

        let op_w = op_targets.iter().map(|s| s.len()).max().unwrap_or(10).min(60);
        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        let mut out = String::new();
        for (entry, op_target) in entries.iter().zip(op_targets) {
            let color = color_for_operation(&entry.operation);
            let visible = truncate(&op_target, 60);

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                entry.id, entry.date, colored, padding, entry.message,
            ));
        }
        out
    }
}
