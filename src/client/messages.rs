//! Message endpoints

use super::{SparkClient, LIST_PAGE_SIZE};
use crate::error::Result;
use crate::http::RequestOptions;
use crate::models::{encode_query, Message, NewMessage};

impl SparkClient {
    /// Post a message
    pub async fn send_message(&self, message: &NewMessage) -> Result<Message> {
        self.call(
            RequestOptions::post()
                .path("/messages")
                .json(serde_json::to_value(message)?),
        )
        .await
    }

    /// Delete a message
    pub async fn delete_message(&self, message_id: &str) -> Result<()> {
        self.call_discard(RequestOptions::delete().path(format!("/messages/{message_id}")))
            .await
    }

    /// Get one message
    pub async fn get_message(&self, message_id: &str) -> Result<Message> {
        self.call(RequestOptions::get().path(format!("/messages/{message_id}")))
            .await
    }

    /// Every message in a room, newest first as the API returns them
    pub async fn list_messages(&self, room_id: &str) -> Result<Vec<Message>> {
        self.list(format!(
            "/messages?roomId={}&max={LIST_PAGE_SIZE}",
            encode_query(room_id)
        ))
        .await
    }
}
