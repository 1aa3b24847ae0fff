//! Pagination module
//!
//! Listings are paginated with a `link` response header pointing at the next
//! page. The walker follows those links sequentially and concatenates items.

mod link;
mod types;
mod walker;

pub use link::parse_link;
pub use types::Page;
pub use walker::{fetch_all, PageWalker};
