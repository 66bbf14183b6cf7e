use super::types::{request, response};
use crate::{
    modules::store::repository,
    types::Context,
    utils::pagination::Paginated,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let stores = repository::find_by_added_by(
        &ctx.db_conn.pool,
        payload.auth.staff.id.clone(),
        &payload.pagination,
    )
    .await
    .map_err(|_| response::Error::FailedToFetchStores)?;

    let total = repository::count_by_added_by(&ctx.db_conn.pool, payload.auth.staff.id)
        .await
        .map_err(|_| response::Error::FailedToFetchStores)?;

    Ok(response::Success::Stores(Paginated::new(
        stores,
        total,
        &payload.pagination,
    )))
}
