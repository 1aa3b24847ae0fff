//! People endpoints

use super::SparkClient;
use crate::error::Result;
use crate::http::RequestOptions;
use crate::models::{Person, PersonQuery};
use crate::pagination::Page;

impl SparkClient {
    /// Look up people by id or email
    ///
    /// An id lookup yields exactly one person; an email lookup yields the
    /// first page of matches, possibly empty.
    pub async fn get_person(&self, query: &PersonQuery) -> Result<Vec<Person>> {
        let reply = self
            .executor
            .execute(RequestOptions::get().path(query.path()))
            .await?;

        match query {
            PersonQuery::ById(_) => Ok(vec![reply.into_json()?]),
            PersonQuery::ByEmail(_) => Ok(Page::from_reply(reply)?.items),
        }
    }
}
