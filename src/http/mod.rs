//! HTTP module
//!
//! Request construction and response classification for the Spark API.
//!
//! # Overview
//!
//! - **Transport**: sends one request over the network (`reqwest` in production)
//! - **Executor**: builds the request from [`RequestOptions`], applies the bearer
//!   token and sorts the response into client errors, raw replies and decoded bodies

mod executor;
mod transport;

pub use executor::{Reply, RequestExecutor, RequestOptions};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, RequestBody, Transport};
