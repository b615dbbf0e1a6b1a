use super::shell::ShellContext;
use crate::ui::messages::header;
use crate::ui::render::render_table;

pub fn handle(ctx: &ShellContext) {
    let view = ctx.ledger.view();
    header(&ctx.labels.entries_header);
    print!("{}", render_table(&view, &ctx.labels, &ctx.render));
}
