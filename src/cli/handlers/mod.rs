mod check;
mod contact;
mod email;
mod init;
mod open;
mod show;
mod tui;
mod utils;

pub use check::handle_check;
pub use contact::{ContactParams, handle_contact};
pub use email::handle_email;
pub use init::handle_init;
pub use open::handle_open;
pub use show::{handle_project, handle_show};
pub use tui::handle_tui;
pub use utils::ConsoleNotifier;

use crate::config::FolioConfig;
use crate::storage::ContentStore;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: FolioConfig,
    pub root: PathBuf,
    pub content_path: PathBuf,
}

impl CommandContext {
    pub fn new(config: FolioConfig, root: PathBuf, content_override: Option<PathBuf>) -> Self {
        let content_path = content_override.unwrap_or_else(|| config.content_path(&root));
        Self {
            config,
            root,
            content_path,
        }
    }

    /// Load the content document. Any failure here is fatal for the command.
    pub fn load_store(&self) -> Result<ContentStore> {
        ContentStore::load(&self.content_path).with_context(|| {
            format!(
                "Failed to load content from {}",
                self.content_path.display()
            )
        })
    }
}
