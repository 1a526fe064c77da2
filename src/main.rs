use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use folio::cli::handlers::{self, CommandContext, ContactParams};
use folio::cli::{Cli, Commands};
use folio::config::FolioConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Tui);
    folio::logging::init(cli.verbose, cli.log_file.clone(), interactive);

    let (config_path, content_path) = (cli.config, cli.content);
    let ctx = || -> Result<CommandContext> {
        let ctx = load_context(config_path.clone(), content_path.clone())?;
        tracing::debug!(content = %ctx.content_path.display(), "resolved content path");
        Ok(ctx)
    };

    match cli.command {
        Commands::Init { force } => handlers::handle_init(force),
        Commands::Check => handlers::handle_check(&ctx()?),
        Commands::Show { section, json } => {
            handlers::handle_show(&ctx()?, section.map(Into::into), json)
        }
        Commands::Project { id, json } => handlers::handle_project(&ctx()?, id, json),
        Commands::Email { copy } => handlers::handle_email(&ctx()?, copy),
        Commands::Open { id, demo } => handlers::handle_open(&ctx()?, id, demo),
        Commands::Contact {
            name,
            email,
            subject,
            message,
            dry_run,
        } => handlers::handle_contact(
            &ctx()?,
            ContactParams {
                name,
                email,
                subject,
                message,
                dry_run,
            },
        ),
        Commands::Tui => handlers::handle_tui(ctx()?),
    }
}

fn load_context(config: Option<PathBuf>, content: Option<PathBuf>) -> Result<CommandContext> {
    let (config, root) = match config {
        Some(path) => FolioConfig::load_from(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir()?;
            FolioConfig::load(&cwd).context("Failed to load config")?
        }
    };
    Ok(CommandContext::new(config, root, content))
}
