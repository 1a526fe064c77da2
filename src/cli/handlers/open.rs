use crate::platform::{SystemOpener, open_external};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_open(ctx: &CommandContext, id: String, demo: bool) -> Result<()> {
    let store = ctx.load_store()?;
    let project = store
        .project(&id)
        .ok_or_else(|| anyhow::anyhow!("Project not found: {}", id))?;

    let (kind, link) = if demo {
        ("demo", project.demo.as_deref())
    } else {
        ("repository", project.github.as_deref())
    };
    let link = link.ok_or_else(|| anyhow::anyhow!("Project {} has no {} link", id, kind))?;

    open_external(&SystemOpener, link)?;
    println!("{} {}", "Opened".green(), link.cyan());
    Ok(())
}
