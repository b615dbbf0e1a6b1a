use super::shell::ShellContext;
use crate::cli::parser::ShellCommand;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &ShellCommand, ctx: &mut ShellContext) -> AppResult<()> {
    if let ShellCommand::Del { index, yes } = cmd {
        // fail on a stale index before asking anything
        let record = ctx.ledger.delete_target(*index)?;

        //
        // Confirmation prompt
        //
        if ctx.cfg.confirm_delete && !*yes {
            let prompt = format!(
                "{} [{} / {}]",
                ctx.labels.confirm_delete_prompt(*index),
                record.container_number,
                record.port
            );
            if !ctx.confirm(&prompt) {
                info(&ctx.labels.operation_cancelled);
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let editing_before = ctx.ledger.edit_session().map(|s| s.index);
        ctx.ledger.delete_record(*index)?;
        success(format!("{} (#{index})", ctx.labels.deleted));

        if editing_before == Some(*index) {
            warning(&ctx.labels.edit_invalidated);
        }
    }

    Ok(())
}
