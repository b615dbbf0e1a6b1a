use super::shell::ShellContext;
use crate::cli::parser::ShellCommand;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &ShellCommand, ctx: &mut ShellContext) -> AppResult<()> {
    if let ShellCommand::Export {
        format,
        file,
        force,
    } = cmd
    {
        let path = expand_tilde(file);
        let records = ctx.ledger.records();

        let n = ExportLogic::export(&path, *format, &records, *force, &mut |prompt| {
            ctx.confirm(prompt)
        })?;

        success(format!(
            "{} export completed: {} ({n} records)",
            format.as_str().to_uppercase(),
            path.display()
        ));
    }

    Ok(())
}
