use super::shell::ShellContext;
use crate::cli::parser::FieldArgs;
use crate::core::Outcome;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::render::render_staged;

/// `edit <index>`: open an edit session pre-filled with the record.
pub fn begin(index: usize, ctx: &mut ShellContext) -> AppResult<()> {
    let staged = ctx.ledger.begin_edit(index)?;
    print!("{}", render_staged(index, &staged, &ctx.labels));
    Ok(())
}

/// `set [fields]`: change staged values, the store is untouched.
pub fn set(fields: &FieldArgs, ctx: &mut ShellContext) -> AppResult<()> {
    let patch = fields.to_patch()?;
    let staged = ctx.ledger.stage_edit(&patch)?;
    if let Some(session) = ctx.ledger.edit_session() {
        print!("{}", render_staged(session.index, &staged, &ctx.labels));
    }
    Ok(())
}

/// `save [fields]`: commit the staged values plus any overrides.
pub fn save(fields: &FieldArgs, ctx: &mut ShellContext) -> AppResult<()> {
    let patch = fields.to_patch()?;
    let index = ctx.ledger.edit_session().map(|s| s.index);

    match ctx.ledger.save_edit(&patch)? {
        Outcome::Applied => {
            let index = index.map(|i| format!(" (#{i})")).unwrap_or_default();
            success(format!("{}{index}", ctx.labels.updated));
        }
        Outcome::Rejected(r) => ctx.reject(r, &ctx.labels.not_saved)?,
    }
    Ok(())
}

pub fn cancel(ctx: &mut ShellContext) -> AppResult<()> {
    match ctx.ledger.cancel_edit() {
        Ok(()) => info(&ctx.labels.edit_cancelled),
        Err(AppError::NoActiveEdit) => info(&ctx.labels.no_active_edit),
        Err(e) => return Err(e),
    }
    Ok(())
}

/// `show`: staged values of the open session and the last operation result.
pub fn show(ctx: &ShellContext) {
    let view = ctx.ledger.view();
    match &view.edit {
        Some(session) => print!(
            "{}",
            render_staged(session.index, &session.staged, &ctx.labels)
        ),
        None => info(&ctx.labels.no_active_edit),
    }
    if let Some(last) = &view.last {
        println!("Last operation: {last}");
    }
}
