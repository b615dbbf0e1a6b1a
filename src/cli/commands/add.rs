use super::shell::ShellContext;
use crate::cli::parser::ShellCommand;
use crate::core::Outcome;
use crate::errors::AppResult;
use crate::models::RecordFields;
use crate::ui::messages::success;
use crate::utils::time;

/// Add a new container entry.
pub fn handle(cmd: &ShellCommand, ctx: &mut ShellContext) -> AppResult<()> {
    if let ShellCommand::Add { fields } = cmd {
        //
        // 1. Parse typed values (port/status/date/time)
        //
        let patch = fields.to_patch()?;

        //
        // 2. Fill the form defaults: config port/status, current time, today
        //
        let defaults = RecordFields::new(
            ctx.cfg.default_port,
            "",
            ctx.cfg.default_status,
            time::now_minute(),
        );
        let candidate = patch.apply_to(&defaults);

        //
        // 3. Execute logic
        //
        match ctx.ledger.submit_entry(&candidate) {
            Outcome::Applied => {
                let index = ctx.ledger.len() - 1;
                success(format!("{} (#{index})", ctx.labels.added));
            }
            Outcome::Rejected(r) => ctx.reject(r, &ctx.labels.not_added)?,
        }
    }

    Ok(())
}
