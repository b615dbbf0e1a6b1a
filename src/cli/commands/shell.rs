//! The record shell: reads one command per line and runs it against a
//! single in-memory [`Ledger`]. Records live as long as the shell.

use crate::cli::parser::{ShellCommand, ShellLine};
use crate::config::Config;
use crate::core::{Ledger, Rejection};
use crate::errors::{AppError, AppResult};
use crate::ui::labels::Labels;
use crate::ui::messages::{error, header, warning};
use crate::ui::render::RenderOptions;
use clap::Parser;
use clap::error::ErrorKind;
use std::io::{self, BufRead, IsTerminal, Write};

/// Everything a shell command needs.
pub struct ShellContext {
    pub ledger: Ledger,
    pub cfg: Config,
    pub labels: Labels,
    pub render: RenderOptions,
    input: Box<dyn BufRead>,
    interactive: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl ShellContext {
    pub fn new(cfg: Config, input: Box<dyn BufRead>, interactive: bool, color: bool) -> Self {
        let labels = cfg.labels();
        let render = RenderOptions {
            comment_width: cfg.comment_width,
            separator: cfg.separator(),
            color,
        };
        Self {
            ledger: Ledger::new(),
            cfg,
            labels,
            render,
            input,
            interactive,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask a yes/no confirmation; the answer is the next input line.
    pub fn confirm(&mut self, prompt: &str) -> bool {
        warning(prompt);
        print!("Confirm [y/N]: ");
        let _ = io::stdout().flush();

        match self.read_line() {
            Ok(Some(answer)) => {
                if !self.interactive {
                    println!("{answer}");
                }
                matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "d" | "da")
            }
            _ => false,
        }
    }

    /// Silent no-op by default; an error with `strict_validation`.
    pub fn reject(&self, rejection: Rejection, message: &str) -> AppResult<()> {
        if self.cfg.strict_validation {
            return Err(rejection.into_error());
        }
        warning(message);
        Ok(())
    }

    /// Parse and run one line.
    pub fn execute(&mut self, line: &str) -> AppResult<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = shlex::split(trimmed)
            .ok_or_else(|| AppError::Command(format!("unbalanced quotes in: {trimmed}")))?;

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(p) => p,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                print!("{e}");
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(AppError::Command(e.to_string().trim_end().to_string())),
        };

        tracing::debug!(command = ?parsed.command, "shell command");
        dispatch(&parsed.command, self)
    }

    /// Run until `quit` or end of input. Command errors are reported and
    /// the shell carries on.
    pub fn run(&mut self) -> AppResult<()> {
        if self.interactive {
            header(&self.labels.title);
            println!("Type 'help' for the list of commands.\n");
        }

        loop {
            if self.interactive {
                print!("rcontainerlog> ");
                io::stdout().flush()?;
            }

            let Some(line) = self.read_line()? else {
                break;
            };

            match self.execute(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => error(e),
            }
        }

        Ok(())
    }
}

/// Central shell command dispatcher
pub fn dispatch(cmd: &ShellCommand, ctx: &mut ShellContext) -> AppResult<Flow> {
    match cmd {
        ShellCommand::Add { .. } => super::add::handle(cmd, ctx)?,
        ShellCommand::List => super::list::handle(ctx),
        ShellCommand::Edit { index } => super::edit::begin(*index, ctx)?,
        ShellCommand::Set { fields } => super::edit::set(fields, ctx)?,
        ShellCommand::Save { fields } => super::edit::save(fields, ctx)?,
        ShellCommand::Cancel => super::edit::cancel(ctx)?,
        ShellCommand::Show => super::edit::show(ctx),
        ShellCommand::Del { .. } => super::del::handle(cmd, ctx)?,
        ShellCommand::Log => super::log::handle(ctx),
        ShellCommand::Export { .. } => super::export::handle(cmd, ctx)?,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Open the shell on stdin or on a script file.
pub fn handle(cfg: Config, script: Option<&str>, no_color: bool) -> AppResult<()> {
    let (input, interactive): (Box<dyn BufRead>, bool) = match script {
        Some(path) => {
            let file = std::fs::File::open(crate::utils::path::expand_tilde(path))?;
            (Box::new(io::BufReader::new(file)), false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            (Box::new(stdin.lock()), interactive)
        }
    };

    let color = !no_color && io::stdout().is_terminal();
    ShellContext::new(cfg, input, interactive, color).run()
}
