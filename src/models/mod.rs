//! API models
//!
//! Typed records for rooms, messages, people, memberships and webhooks, plus
//! the payloads sent to create them.

mod requests;
mod resources;

pub use requests::{
    encode_query, AccessTokenRequest, NewMembership, NewMessage, NewRoom, PersonQuery,
    RefreshTokenRequest, WebhookParams,
};
pub use resources::{AccessToken, Membership, Message, Person, Room, Webhook};
