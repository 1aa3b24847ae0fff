//! Membership endpoints

use super::SparkClient;
use crate::error::Result;
use crate::http::RequestOptions;
use crate::models::{Membership, NewMembership};
use serde_json::Value;

impl SparkClient {
    /// Add a person to a room
    pub async fn add_member_to_room(&self, member: &NewMembership) -> Result<Membership> {
        self.call(
            RequestOptions::post()
                .path("/memberships")
                .json(serde_json::to_value(member)?),
        )
        .await
    }

    /// Add participants to a room in one call
    ///
    /// `participants` is sent as the request body unchanged and the decoded
    /// response is returned as-is.
    pub async fn add_user_to_room(&self, room_id: &str, participants: &Value) -> Result<Value> {
        self.call(
            RequestOptions::post()
                .path(format!("/rooms/{room_id}/participants"))
                .json(participants.clone()),
        )
        .await
    }

    /// Remove a membership
    pub async fn remove_user_from_room(&self, membership_id: &str) -> Result<()> {
        self.call_discard(RequestOptions::delete().path(format!("/memberships/{membership_id}")))
            .await
    }
}
