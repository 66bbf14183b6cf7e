use super::types::{request, response};
use crate::{modules::store::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_short_name(&ctx.db_conn.pool, payload.short_name)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .map_or(Ok(response::Success::NameAvailable), |_| {
            Err(response::Error::NameTaken)
        })
}
