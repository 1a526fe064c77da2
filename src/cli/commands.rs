use crate::sections::Section;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(
    author,
    version,
    about = "A terminal portfolio viewer with a mail-client contact form"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .folio.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the content document (overrides config)
    #[arg(long, global = true, env = "FOLIO_CONTENT")]
    pub content: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter .folio.toml and content document
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Load and validate the content document
    Check,

    /// Print a section, or the whole portfolio
    Show {
        /// Section to print
        #[arg(value_enum)]
        section: Option<SectionArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single project
    Project {
        /// Project ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the contact email
    Email {
        /// Copy it to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Open a project's repository or live demo
    Open {
        /// Project ID
        id: String,

        /// Open the live demo instead of the repository
        #[arg(long)]
        demo: bool,
    },

    /// Send a message through the local mail client
    Contact {
        /// Your name
        #[arg(long)]
        name: String,

        /// Your email address
        #[arg(long)]
        email: String,

        /// Subject line (a default is used when omitted)
        #[arg(long, default_value = "")]
        subject: String,

        /// Message body (use '-' to read from stdin)
        #[arg(short, long)]
        message: String,

        /// Print the mailto link instead of opening it
        #[arg(long)]
        dry_run: bool,
    },

    /// Browse the portfolio interactively
    #[command(visible_alias = "ui")]
    Tui,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SectionArg {
    Hero,
    About,
    Experience,
    Projects,
    Contact,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Hero => Section::Hero,
            SectionArg::About => Section::About,
            SectionArg::Experience => Section::Experience,
            SectionArg::Projects => Section::Projects,
            SectionArg::Contact => Section::Contact,
        }
    }
}
