use super::types::{request, response};
use crate::{
    modules::{staff, store::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let store = repository::find_by_id_and_added_by(
        &ctx.db_conn.pool,
        payload.id,
        payload.auth.staff.id.clone(),
    )
    .await
    .map_err(|_| response::Error::FailedToDeleteStore)?
    .ok_or(response::Error::StoreNotFound)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToDeleteStore
    })?;

    // Delete and counter decrement are one atomic unit, mirroring creation.
    repository::delete_by_id(&mut *tx, store.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteStore)?;

    staff::repository::adjust_added_stores(&mut *tx, payload.auth.staff.id, -1)
        .await
        .map_err(|_| response::Error::FailedToDeleteStore)?;

    tx.commit()
        .await
        .map(|_| response::Success::StoreDeleted)
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::FailedToDeleteStore
        })
}
