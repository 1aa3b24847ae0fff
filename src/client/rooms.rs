//! Room endpoints

use super::{SparkClient, LIST_PAGE_SIZE};
use crate::error::Result;
use crate::http::RequestOptions;
use crate::models::{NewRoom, Room};
use tracing::info;

impl SparkClient {
    /// Create a room
    pub async fn create_room(&self, room: &NewRoom) -> Result<Room> {
        let created: Room = self
            .call(RequestOptions::post().path("/rooms").json(serde_json::to_value(room)?))
            .await?;
        info!("Created room {}", created.id);
        Ok(created)
    }

    /// Delete a room
    pub async fn remove_room(&self, room_id: &str) -> Result<()> {
        self.call_discard(RequestOptions::delete().path(format!("/rooms/{room_id}")))
            .await
    }

    /// Every room the caller belongs to
    pub async fn list_rooms(&self) -> Result<Vec<Room>> {
        self.list(format!("/rooms?max={LIST_PAGE_SIZE}")).await
    }
}
