use crate::platform::{SystemClipboard, copy_to_clipboard};
use anyhow::Result;

use super::CommandContext;
use super::utils::ConsoleNotifier;

pub fn handle_email(ctx: &CommandContext, copy: bool) -> Result<()> {
    let store = ctx.load_store()?;
    let email = &store.profile().email;
    println!("{}", email);

    if copy {
        let mut clipboard = SystemClipboard::new();
        if !copy_to_clipboard(&mut clipboard, &ConsoleNotifier, email) {
            anyhow::bail!("Clipboard not available");
        }
    }
    Ok(())
}
