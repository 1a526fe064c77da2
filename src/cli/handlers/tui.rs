use anyhow::Result;

use super::CommandContext;

pub fn handle_tui(ctx: CommandContext) -> Result<()> {
    let store = ctx.load_store()?;
    crate::tui::run_tui(ctx.config, store)?;
    Ok(())
}
