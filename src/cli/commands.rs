//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spark REST API command-line client
#[derive(Parser, Debug)]
#[command(name = "spark-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides config file and environment)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token (overrides config file)
    #[arg(long, global = true, env = "SPARK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every room
    Rooms,

    /// Create a room
    CreateRoom {
        /// Room title
        title: String,
    },

    /// Delete a room
    RemoveRoom {
        room_id: String,
    },

    /// List every message in a room
    Messages {
        #[arg(long)]
        room_id: String,
    },

    /// Show one message
    Message {
        message_id: String,
    },

    /// Post a message to a room or a person
    Send {
        /// Target room
        #[arg(long, conflicts_with = "to")]
        room_id: Option<String>,

        /// Target person email
        #[arg(long, required_unless_present = "room_id")]
        to: Option<String>,

        /// Message text
        #[arg(long, required_unless_present = "markdown")]
        text: Option<String>,

        /// Message markdown
        #[arg(long)]
        markdown: Option<String>,

        /// Public URL of a file to attach
        #[arg(long)]
        file: Vec<String>,
    },

    /// Delete a message
    DeleteMessage {
        message_id: String,
    },

    /// Look up a person by id or email
    Person {
        #[arg(long, conflicts_with = "email", required_unless_present = "email")]
        id: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Add a person to a room
    AddMember {
        #[arg(long)]
        room_id: String,

        #[arg(long, conflicts_with = "person_id", required_unless_present = "person_id")]
        email: Option<String>,

        #[arg(long)]
        person_id: Option<String>,

        /// Make the person a moderator
        #[arg(long)]
        moderator: bool,
    },

    /// Remove a membership
    RemoveMember {
        membership_id: String,
    },

    /// Register a message-created webhook for a room
    AddWebhook {
        #[arg(long)]
        name: String,

        /// URL events are posted to
        #[arg(long)]
        target_url: String,

        #[arg(long)]
        room_id: String,
    },

    /// Delete a webhook
    DeleteWebhook {
        webhook_id: String,
    },

    /// List the URIs of every file posted in a room
    Files {
        #[arg(long)]
        room_id: String,
    },

    /// Download a file by content URI
    Download {
        uri: String,

        /// Directory to write the file into (prints JSON when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_messages() {
        let cli = Cli::parse_from(["spark-client", "messages", "--room-id", "r1"]);
        assert!(matches!(cli.command, Commands::Messages { ref room_id } if room_id == "r1"));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "spark-client",
            "rooms",
            "--base-url",
            "http://localhost:9000/v1",
            "--token",
            "t",
            "-f",
            "pretty",
            "-v",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000/v1"));
        assert_eq!(cli.token.as_deref(), Some("t"));
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(cli.verbose);
    }

    #[test]
    fn test_send_requires_target() {
        assert!(Cli::try_parse_from(["spark-client", "send", "--text", "hi"]).is_err());
        assert!(Cli::try_parse_from(["spark-client", "send", "--room-id", "r1"]).is_err());
        assert!(Cli::try_parse_from([
            "spark-client", "send", "--room-id", "r1", "--to", "a@b.c", "--text", "hi"
        ])
        .is_err());

        let cli =
            Cli::try_parse_from(["spark-client", "send", "--to", "a@b.c", "--markdown", "*hi*"])
                .unwrap();
        assert!(matches!(cli.command, Commands::Send { to: Some(_), .. }));
    }

    #[test]
    fn test_person_needs_exactly_one_key() {
        assert!(Cli::try_parse_from(["spark-client", "person"]).is_err());
        assert!(
            Cli::try_parse_from(["spark-client", "person", "--id", "p", "--email", "e"]).is_err()
        );
        assert!(Cli::try_parse_from(["spark-client", "person", "--email", "e@x.y"]).is_ok());
    }
}
