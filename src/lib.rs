//! # Folio - a terminal portfolio viewer
//!
//! Folio renders a personal portfolio (profile, skills, experience, projects)
//! from a single JSON content document, and offers a contact form that hands
//! the visitor's message to their own mail client through a `mailto:` link.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a starter .folio.toml and content.json
//! folio init
//!
//! # Check the content document
//! folio check
//!
//! # Browse interactively
//! folio tui
//!
//! # Send a message without the TUI
//! folio contact --name "Jane Doe" --email jane@example.com --message "Hello"
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`contact`]: Contact form state machine and mail handoff
//! - [`error`]: Error types and result aliases
//! - [`model`]: Content data model
//! - [`notify`]: Transient notifications
//! - [`platform`]: Clipboard and link-opening seams
//! - [`sections`]: Page sections and navigation ids
//! - [`storage`]: Content document loading and validation
//! - [`tui`]: Terminal user interface
//! - [`validation`]: Contact input validation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.folio.toml` configuration files and project discovery.
pub mod config;

pub mod contact;

/// Error types and result aliases.
///
/// Defines `FolioError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Data models for the content document.
pub mod model;

pub mod notify;
pub mod platform;
pub mod sections;

/// Read-only content storage.
pub mod storage;

/// Terminal user interface.
///
/// Interactive TUI built with ratatui for browsing the portfolio.
pub mod tui;

/// Input validation utilities.
///
/// Validates contact form submissions.
pub mod validation;
