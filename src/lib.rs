//! # Spark REST API client
//!
//! An async client for the Spark messaging platform's REST API.
//!
//! ## Features
//!
//! - **Rooms, messages, people, memberships, webhooks**: one method per operation
//! - **Link-header pagination**: list calls follow `Link` headers until the last page
//! - **File downloads**: binary content comes back base64-encoded, text verbatim
//! - **Per-call tokens**: every call can override the configured bearer token
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spark_client::{ClientConfig, SparkClient, Result};
//! use spark_client::models::NewMessage;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::builder().token("bot-token").build()?;
//!     let client = SparkClient::new(config)?;
//!
//!     for room in client.list_rooms().await? {
//!         println!("{} {:?}", room.id, room.title);
//!     }
//!
//!     client
//!         .send_message(&NewMessage::to_room("room-id", "hello"))
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       SparkClient                         │
//! │ rooms · messages · people · memberships · webhooks · files│
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴─────────────┬────────────────┐
//! │  Pagination  │      RequestExecutor      │    Download    │
//! ├──────────────┼───────────────────────────┼────────────────┤
//! │ Link header  │ Bearer auth · 4xx errors  │ File name      │
//! │ Page walker  │ Raw vs decoded replies    │ Base64 / text  │
//! └──────────────┴───────────────────────────┴────────────────┘
//!                              │
//!                     Transport (reqwest)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport and request execution
pub mod http;

/// Link-header pagination
pub mod pagination;

/// File download classification
pub mod download;

/// API resources and request payloads
pub mod models;

/// The API client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{get_file_uris, SparkClient};
pub use config::ClientConfig;
pub use download::{FileDownload, FilePayload};
pub use error::{Error, Result};
pub use pagination::{Page, PageWalker};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
