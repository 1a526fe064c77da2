use crate::config::{CONFIG_FILE_NAME, FolioConfig};
use crate::storage::SAMPLE_CONTENT;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Project already initialized at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let config = FolioConfig::default();
    let content_path = config.content_path(&cwd);

    config.save(&config_path)?;
    if content_path.exists() && !force {
        println!(
            "{} {}",
            "Keeping existing".yellow(),
            content_path.display()
        );
    } else {
        std::fs::write(&content_path, SAMPLE_CONTENT)?;
    }

    println!("{} folio project in {}", "Initialized".green(), cwd.display());
    println!("  Config:  {}", config_path.display());
    println!("  Content: {}", content_path.display());

    Ok(())
}
