use super::shell::ShellContext;
use crate::core::log::LogLogic;

/// Print the internal operation log.
pub fn handle(ctx: &ShellContext) {
    let entries = ctx.ledger.journal();
    if entries.is_empty() {
        println!("📜 Internal log is empty.");
        return;
    }

    println!("📜 Internal log:\n");
    print!("{}", LogLogic::render(&entries));
}
