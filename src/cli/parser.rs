use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::{Port, RecordPatch, Status};
use crate::ui::labels::Language;
use crate::utils::{date, time};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rContainerLog
#[derive(Parser)]
#[command(
    name = "rcontainerlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log container arrivals at named ports: add, edit, delete and list records in an interactive shell",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Language for labels and messages (overrides the config file)
    #[arg(global = true, long = "lang", value_enum)]
    pub lang: Option<Language>,

    /// Report an empty container number as an error instead of ignoring the entry
    #[arg(global = true, long = "strict")]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start the record shell (default)
    Shell {
        /// Read shell commands from FILE instead of standard input
        #[arg(long, value_name = "FILE")]
        script: Option<String>,

        /// Disable colors in the entries table
        #[arg(long = "no-color")]
        no_color: bool,
    },
}

/// Record fields as typed in a shell command. All optional.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Date (YYYY-MM-DD); today when omitted on add
    #[arg(long)]
    pub date: Option<String>,

    /// Port: Ålesund, Stavanger, Haugesund, Molde, Førde, Trondheim
    #[arg(long, short = 'p')]
    pub port: Option<String>,

    /// Container number
    #[arg(long = "container", short = 'c')]
    pub container: Option<String>,

    /// Status: empty, B, T, lastcast, module, 7pc, ADR, "Ikke ADR"
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Arrival time (HH:MM); now when omitted on add
    #[arg(long = "time", short = 't')]
    pub time: Option<String>,

    /// Free-form comment
    #[arg(long, short = 'm')]
    pub comment: Option<String>,
}

impl FieldArgs {
    /// Parse typed values. Ports and statuses outside the fixed sets are rejected.
    pub fn to_patch(&self) -> AppResult<RecordPatch> {
        let date = match &self.date {
            Some(d) => Some(date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
            None => None,
        };

        Ok(RecordPatch {
            date,
            port: self.port.as_deref().map(str::parse::<Port>).transpose()?,
            container_number: self.container.clone(),
            status: self.status.as_deref().map(str::parse::<Status>).transpose()?,
            arrival_time: time::parse_optional_time(self.time.as_ref())?,
            comment: self.comment.clone(),
        })
    }
}

/// One line typed into the record shell.
#[derive(Parser, Debug)]
#[command(
    name = "rcontainerlog",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [OPTIONS]"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Add a new container entry
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// List all entries
    #[command(alias = "ls")]
    List,

    /// Start editing the entry at INDEX
    Edit { index: usize },

    /// Change staged values of the entry being edited
    Set {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Save the entry being edited (optionally changing fields)
    Save {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Discard the changes of the entry being edited
    Cancel,

    /// Delete the entry at INDEX
    #[command(alias = "rm")]
    Del {
        index: usize,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show the current edit session and the result of the last operation
    Show,

    /// Print the internal operation log
    Log,

    /// Export the current entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite without confirmation")]
        force: bool,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}
