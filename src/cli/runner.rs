//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::save::{ensure_printable, save_download};
use crate::client::{get_file_uris, SparkClient};
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::models::{NewMembership, NewMessage, NewRoom, PersonQuery, WebhookParams};
use serde::Serialize;
use serde_json::json;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = SparkClient::new(self.client_config()?)?;

        match &self.cli.command {
            Commands::Rooms => self.emit(&client.list_rooms().await?),
            Commands::CreateRoom { title } => {
                self.emit(&client.create_room(&NewRoom::new(title)).await?)
            }
            Commands::RemoveRoom { room_id } => {
                client.remove_room(room_id).await?;
                self.emit(&json!({"removed": room_id}))
            }
            Commands::Messages { room_id } => self.emit(&client.list_messages(room_id).await?),
            Commands::Message { message_id } => {
                self.emit(&client.get_message(message_id).await?)
            }
            Commands::Send {
                room_id,
                to,
                text,
                markdown,
                file,
            } => {
                let message = NewMessage {
                    room_id: room_id.clone(),
                    to_person_email: to.clone(),
                    text: text.clone(),
                    markdown: markdown.clone(),
                    files: file.clone(),
                    ..Default::default()
                };
                self.emit(&client.send_message(&message).await?)
            }
            Commands::DeleteMessage { message_id } => {
                client.delete_message(message_id).await?;
                self.emit(&json!({"deleted": message_id}))
            }
            Commands::Person { id, email } => {
                let query = match (id, email) {
                    (Some(id), _) => PersonQuery::ById(id.clone()),
                    (None, Some(email)) => PersonQuery::ByEmail(email.clone()),
                    (None, None) => return Err(Error::config("Either --id or --email is required")),
                };
                self.emit(&client.get_person(&query).await?)
            }
            Commands::AddMember {
                room_id,
                email,
                person_id,
                moderator,
            } => {
                let member = NewMembership {
                    room_id: room_id.clone(),
                    person_id: person_id.clone(),
                    person_email: email.clone(),
                    is_moderator: moderator.then_some(true),
                };
                self.emit(&client.add_member_to_room(&member).await?)
            }
            Commands::RemoveMember { membership_id } => {
                client.remove_user_from_room(membership_id).await?;
                self.emit(&json!({"removed": membership_id}))
            }
            Commands::AddWebhook {
                name,
                target_url,
                room_id,
            } => {
                let params = WebhookParams::new(name, target_url, room_id);
                self.emit(&client.add_webhook(&params).await?)
            }
            Commands::DeleteWebhook { webhook_id } => {
                client.delete_webhook(webhook_id).await?;
                self.emit(&json!({"deleted": webhook_id}))
            }
            Commands::Files { room_id } => {
                let messages = client.list_messages(room_id).await?;
                self.emit(&get_file_uris(&messages))
            }
            Commands::Download { uri, output } => {
                let download = client.download_file(uri, None).await?;
                match output {
                    Some(dir) => {
                        let path = save_download(&download, dir)?;
                        info!("Saved {}", path.display());
                        self.emit(&json!({
                            "fileName": download.file_name,
                            "contentType": download.content_type,
                            "path": path,
                        }))
                    }
                    None => {
                        ensure_printable(&download)?;
                        self.emit(&download)
                    }
                }
            }
        }
    }

    /// Resolve client settings: config file or environment, then CLI flags
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ClientConfig::from_env()?,
        };

        if let Some(url) = &self.cli.base_url {
            config.base_url.clone_from(url);
        }
        if let Some(token) = &self.cli.token {
            config.token.clone_from(token);
        }

        config.validate()?;
        if config.default_token().is_none() {
            return Err(Error::missing_field("token"));
        }
        Ok(config)
    }

    /// Print a value in the selected format
    fn emit<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let out = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{out}");
        Ok(())
    }
}
