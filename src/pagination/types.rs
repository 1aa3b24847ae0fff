//! Pagination types
//!
//! A [`Page`] is one response's worth of listing items plus the link to the
//! next page, if the server sent one.

use super::link::parse_link;
use crate::error::Result;
use crate::http::{HttpResponse, Reply};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Listing envelope: `{"items": [...]}`
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct Envelope<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Absolute URI of the next page
    pub link: Option<String>,
}

impl<T: DeserializeOwned> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, link: Option<String>) -> Self {
        Self { items, link }
    }

    /// Build a page from a raw response: items from the body, link from the header
    pub fn from_response(response: &HttpResponse) -> Result<Self> {
        let envelope: Envelope<T> = response.json()?;
        let link = response.link().map(parse_link).transpose()?;
        Ok(Self::new(envelope.items, link))
    }

    /// Build a terminal page from an already decoded body
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::new(Vec::new(), None));
        }
        let envelope: Envelope<T> = serde_json::from_value(value)?;
        Ok(Self::new(envelope.items, None))
    }

    /// Build a page from whatever the executor returned
    pub fn from_reply(reply: Reply) -> Result<Self> {
        match reply {
            Reply::Raw(response) => Self::from_response(&response),
            Reply::Body(value) => Self::from_value(value),
        }
    }
}

impl<T> Page<T> {
    /// Check whether another page follows
    pub fn has_next(&self) -> bool {
        self.link.is_some()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
