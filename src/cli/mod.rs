//! CLI module
//!
//! Command-line interface over [`SparkClient`](crate::client::SparkClient).
//!
//! # Commands
//!
//! - `rooms` / `create-room` / `remove-room` - Room management
//! - `messages` / `message` / `send` / `delete-message` - Messages
//! - `person` - Look up a person by id or email
//! - `add-member` / `remove-member` - Room memberships
//! - `add-webhook` / `delete-webhook` - Webhooks
//! - `files` / `download` - File URIs and content

mod commands;
mod runner;
mod save;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
