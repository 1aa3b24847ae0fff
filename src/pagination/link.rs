//! Link header parsing
//!
//! The API advertises the next page as `Link: <https://...>; rel="next"`.

use crate::error::{Error, Result};
use url::Url;

/// Extract the next-page URI from a raw `link` header value
///
/// Takes everything before the first `;` and strips the enclosing angle
/// brackets. The result must be an absolute URL.
///
/// ```
/// use spark_client::pagination::parse_link;
///
/// let uri = parse_link(r#"<https://api.example.com/v1/messages?cursor=abc>; rel="next""#).unwrap();
/// assert_eq!(uri, "https://api.example.com/v1/messages?cursor=abc");
/// ```
pub fn parse_link(header: &str) -> Result<String> {
    let first = header.split(';').next().unwrap_or_default().trim();
    let uri = first.strip_prefix('<').unwrap_or(first);
    let uri = uri.strip_suffix('>').unwrap_or(uri).trim();

    if uri.is_empty() || Url::parse(uri).is_err() {
        return Err(Error::invalid_link(header));
    }

    Ok(uri.to_string())
}
