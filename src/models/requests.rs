//! Request payloads

use crate::types::FormFields;
use serde::Serialize;
use serde_json::{json, Value};

/// Body of `POST /rooms`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl NewRoom {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            team_id: None,
        }
    }
}

/// Body of `POST /messages`
///
/// Addressed either to a room or to a single person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    /// Public URLs of files to attach
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl NewMessage {
    /// Plain text message to a room
    pub fn to_room(room_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            room_id: Some(room_id.into()),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Plain text direct message to a person by email
    pub fn to_email(email: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to_person_email: Some(email.into()),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Replace the body with markdown
    #[must_use]
    pub fn markdown(mut self, markdown: impl Into<String>) -> Self {
        self.markdown = Some(markdown.into());
        self
    }

    /// Attach a file by public URL
    #[must_use]
    pub fn file(mut self, url: impl Into<String>) -> Self {
        self.files.push(url.into());
        self
    }
}

/// Body of `POST /memberships`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMembership {
    pub room_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moderator: Option<bool>,
}

impl NewMembership {
    /// Add a person by email
    pub fn by_email(room_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            person_email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Add a person by id
    pub fn by_id(room_id: impl Into<String>, person_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            person_id: Some(person_id.into()),
            ..Default::default()
        }
    }
}

/// How to look up a person
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonQuery {
    ById(String),
    ByEmail(String),
}

impl PersonQuery {
    /// Request path for this lookup
    pub fn path(&self) -> String {
        match self {
            Self::ById(id) => format!("/people/{id}"),
            Self::ByEmail(email) => format!("/people?email={}", encode_query(email)),
        }
    }
}

/// Parameters for a message-created webhook on one room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookParams {
    pub name: String,
    /// URL the platform posts events to
    pub hook_url: String,
    pub room_id: String,
}

impl WebhookParams {
    pub fn new(
        name: impl Into<String>,
        hook_url: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            hook_url: hook_url.into(),
            room_id: room_id.into(),
        }
    }

    /// Body of `POST /webhooks`
    pub fn to_body(&self) -> Value {
        json!({
            "name": self.name,
            "targetUrl": self.hook_url,
            "resource": "messages",
            "event": "created",
            "filter": format!("roomId={}", self.room_id),
        })
    }
}

/// Authorization-code grant for `POST /access_token`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTokenRequest {
    pub client_id: String,
    pub client_secret: String,
    pub code: String,
    pub redirect_uri: String,
}

impl AccessTokenRequest {
    /// URL-encoded form fields
    pub fn to_form(&self) -> FormFields {
        vec![
            ("grant_type".to_string(), "authorization_code".to_string()),
            ("client_id".to_string(), self.client_id.clone()),
            ("client_secret".to_string(), self.client_secret.clone()),
            ("code".to_string(), self.code.clone()),
            ("redirect_uri".to_string(), self.redirect_uri.clone()),
        ]
    }
}

/// Refresh-token grant for `POST /access_token`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTokenRequest {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl RefreshTokenRequest {
    /// URL-encoded form fields
    pub fn to_form(&self) -> FormFields {
        vec![
            ("grant_type".to_string(), "refresh_token".to_string()),
            ("client_id".to_string(), self.client_id.clone()),
            ("client_secret".to_string(), self.client_secret.clone()),
            ("refresh_token".to_string(), self.refresh_token.clone()),
        ]
    }
}

/// Percent-encode a query parameter value
pub fn encode_query(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
