//! Terminal user interface for folio.
//!
//! An interactive portfolio viewer built with ratatui.
//!
//! ## Usage
//!
//! ```bash
//! folio tui
//! ```
//!
//! ## Keybindings
//!
//! - `←/→`, `Tab`: Previous/next section
//! - `1`-`5`: Jump to a section
//! - `↑/↓`: Select an entry or scroll
//! - `Enter`: Expand a project / open the contact form
//! - `o` / `O`: Open project code / demo
//! - `y`: Copy the contact email
//! - `m`: Open the mail client
//! - `i`: Write a message
//! - `?`: Help
//! - `q`: Quit

pub mod app;
mod handlers;
pub mod theme;
mod ui;
mod ui_utils;
mod ui_views;

pub use app::run_tui;
pub use handlers::handle_key;
