//! Pagination walker
//!
//! Follows `link` headers until the server stops sending one, accumulating
//! items in fetch order.

use super::types::Page;
use crate::error::Result;
use crate::http::{RequestExecutor, RequestOptions};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Materializes a paginated listing
///
/// Invariant: `items` holds every item fetched so far, in order, and `link`
/// is the next page still to fetch. Pages are fetched one at a time since
/// each link is only known once the previous response is parsed.
pub struct PageWalker<'a, T> {
    executor: &'a RequestExecutor,
    token: Option<String>,
    items: Vec<T>,
    link: Option<String>,
    pages_fetched: usize,
}

impl<'a, T: DeserializeOwned> PageWalker<'a, T> {
    /// Start from an already fetched first page
    pub fn new(executor: &'a RequestExecutor, first: Page<T>) -> Self {
        Self {
            executor,
            token: None,
            items: first.items,
            link: first.link,
            pages_fetched: 0,
        }
    }

    /// Use this token for follow-up pages instead of the client default
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Pages fetched beyond the first one
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Items accumulated so far
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Link of the next page, if any
    pub fn next_link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Fetch the next page and append its items
    ///
    /// Returns `false` once there is nothing left to fetch.
    pub async fn advance(&mut self) -> Result<bool> {
        let Some(link) = self.link.take() else {
            return Ok(false);
        };

        let mut options = RequestOptions::get().uri(link);
        if let Some(token) = &self.token {
            options = options.token(token.clone());
        }

        let page: Page<T> = Page::from_reply(self.executor.execute(options).await?)?;
        self.pages_fetched += 1;
        debug!(
            "Fetched page {} with {} items (more: {})",
            self.pages_fetched + 1,
            page.len(),
            page.has_next()
        );

        self.items.extend(page.items);
        self.link = page.link;
        Ok(true)
    }

    /// Walk to the last page and return every item
    pub async fn collect(mut self) -> Result<Vec<T>> {
        while self.advance().await? {}
        debug!(
            "Listing complete: {} items over {} pages",
            self.items.len(),
            self.pages_fetched + 1
        );
        Ok(self.items)
    }
}

impl<T> std::fmt::Debug for PageWalker<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageWalker")
            .field("items", &self.items.len())
            .field("link", &self.link)
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}

/// Run a listing request and follow its pages to the end
///
/// A first response without a `link` header is returned as-is without
/// constructing a walker.
pub async fn fetch_all<T: DeserializeOwned>(
    executor: &RequestExecutor,
    options: RequestOptions,
) -> Result<Vec<T>> {
    let token = options.token.clone();
    let first: Page<T> = Page::from_reply(executor.execute(options).await?)?;

    if !first.has_next() {
        return Ok(first.items);
    }

    let mut walker = PageWalker::new(executor, first);
    if let Some(token) = token {
        walker = walker.with_token(token);
    }
    walker.collect().await
}
