//! Field labels and user-facing strings, per language.
//!
//! Both the English and the Croatian form share one workflow; only the text
//! differs.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hr,
}

/// Optional per-field label overrides from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl LabelOverrides {
    pub fn is_empty(&self) -> bool {
        *self == LabelOverrides::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    // field labels
    pub date: String,
    pub port: String,
    pub container_number: String,
    pub status: String,
    pub arrival_time: String,
    pub comment: String,

    // messages
    pub title: String,
    pub entries_header: String,
    pub edit_header: String,
    pub no_entries: String,
    pub added: String,
    pub not_added: String,
    pub not_saved: String,
    pub updated: String,
    pub deleted: String,
    pub edit_cancelled: String,
    pub no_active_edit: String,
    pub edit_invalidated: String,
    pub confirm_delete: String,
    pub operation_cancelled: String,
}

fn s(v: &str) -> String {
    v.to_string()
}

impl Labels {
    pub fn for_language(lang: Language) -> Self {
        match lang {
            Language::En => Self {
                date: s("Date"),
                port: s("Port"),
                container_number: s("Container Number"),
                status: s("Status"),
                arrival_time: s("Arrival Time"),
                comment: s("Comment"),
                title: s("📦 Container Entry Form"),
                entries_header: s("📊 Container Entries"),
                edit_header: s("✏️ Edit Container Entry"),
                no_entries: s("📋 No container entries yet. Add your first entry with 'add'."),
                added: s("Container entry added successfully!"),
                not_added: s("Entry not added: container number is empty."),
                not_saved: s("Changes not saved: container number is empty."),
                updated: s("Entry updated successfully!"),
                deleted: s("Entry deleted successfully!"),
                edit_cancelled: s("Edit cancelled."),
                no_active_edit: s("No entry is being edited."),
                edit_invalidated: s("The entry being edited was deleted; edit discarded."),
                confirm_delete: s("Delete entry #{index}? This action is irreversible."),
                operation_cancelled: s("Operation cancelled."),
            },
            Language::Hr => Self {
                date: s("Datum"),
                port: s("Luka"),
                container_number: s("Kontejner"),
                status: s("Status"),
                arrival_time: s("Vrijeme dolaska"),
                comment: s("Komentar"),
                title: s("📦 Evidencija ulaska kontejnera"),
                entries_header: s("📑 Pregled zapisa"),
                edit_header: s("✏️ Uredi zapis"),
                no_entries: s("📋 Još nema zapisa. Dodajte prvi zapis naredbom 'add'."),
                added: s("Zapis je dodan."),
                not_added: s("Zapis nije dodan: broj kontejnera je prazan."),
                not_saved: s("Promjene nisu spremljene: broj kontejnera je prazan."),
                updated: s("Zapis je ažuriran."),
                deleted: s("Zapis je obrisan."),
                edit_cancelled: s("Uređivanje je otkazano."),
                no_active_edit: s("Nijedan zapis se trenutno ne uređuje."),
                edit_invalidated: s("Zapis koji se uređivao je obrisan; izmjene su odbačene."),
                confirm_delete: s("Obrisati zapis #{index}? Ova radnja je nepovratna."),
                operation_cancelled: s("Operacija je otkazana."),
            },
        }
    }

    pub fn with_overrides(mut self, o: &LabelOverrides) -> Self {
        let pairs = [
            (&mut self.date, &o.date),
            (&mut self.port, &o.port),
            (&mut self.container_number, &o.container_number),
            (&mut self.status, &o.status),
            (&mut self.arrival_time, &o.arrival_time),
            (&mut self.comment, &o.comment),
        ];
        for (slot, value) in pairs {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }
        self
    }

    pub fn confirm_delete_prompt(&self, index: usize) -> String {
        self.confirm_delete.replace("{index}", &index.to_string())
    }

    /// Column headers in record order.
    pub fn field_headers(&self) -> [&str; 6] {
        [
            &self.date,
            &self.port,
            &self.container_number,
            &self.status,
            &self.arrival_time,
            &self.comment,
        ]
    }
}
