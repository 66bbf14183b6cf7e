use super::types::{request, response};
use crate::{
    modules::{
        plan,
        store::{repository, subscription},
    },
    types::Context,
};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    // Updates are owner-scoped; a store added by another staff reads as
    // absent.
    let store = repository::find_by_id_and_added_by(
        &ctx.db_conn.pool,
        payload.id.clone(),
        payload.auth.staff.id,
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateStore)?
    .ok_or(response::Error::StoreNotFound)?;

    if let Some(plan_id) = &payload.body.plan_id {
        plan::repository::find_by_id(&ctx.db_conn.pool, plan_id.clone())
            .await
            .map_err(|_| response::Error::FailedToUpdateStore)?
            .ok_or(response::Error::PlanNotFound)?;
    }

    let subscription = subscription::resolve(
        &store.plan_id,
        payload.body.plan_id.as_deref(),
        Utc::now().naive_utc(),
    );

    repository::update_by_id(
        &ctx.db_conn.pool,
        payload.id,
        repository::UpdateStorePayload {
            display_name: payload.body.display_name,
            latitude: payload.body.latitude,
            longitude: payload.body.longitude,
            is_active: payload.body.is_active,
            subscription,
        },
    )
    .await
    .map(|_| response::Success::StoreUpdated)
    .map_err(|_| response::Error::FailedToUpdateStore)
}
