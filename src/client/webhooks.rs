//! Webhook endpoints

use super::SparkClient;
use crate::error::Result;
use crate::http::RequestOptions;
use crate::models::{Webhook, WebhookParams};
use tracing::info;

impl SparkClient {
    /// Register a webhook for messages created in one room
    pub async fn add_webhook(&self, params: &WebhookParams) -> Result<Webhook> {
        let webhook: Webhook = self
            .call(RequestOptions::post().path("/webhooks").json(params.to_body()))
            .await?;
        info!("Registered webhook {} for room {}", webhook.id, params.room_id);
        Ok(webhook)
    }

    /// Delete a webhook
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<()> {
        self.call_discard(RequestOptions::delete().path(format!("/webhooks/{webhook_id}")))
            .await
    }
}
