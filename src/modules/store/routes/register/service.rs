use super::types::{request, response};
use crate::{
    modules::{
        auth::service::password,
        plan, staff,
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

    // Registration is gated on phone verification, the same way the
    // password-reset flow is.
    let verification = ctx
        .otp_gateway
        .verify(&payload.body.phone_number, &payload.body.code)
        .await
        .map_err(|_| response::Error::FailedToVerifyOtp)?;

    if !verification.is_approved() {
        return Err(response::Error::InvalidCode);
    }

    plan::repository::find_by_id(&ctx.db_conn.pool, payload.body.plan_id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateStore)?
        .ok_or(response::Error::PlanNotFound)?;

    // The store credential bootstraps to the store's phone number.
    let password_hash = password::hash(&payload.body.phone_number)
        .map_err(|_| response::Error::FailedToCreateStore)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateStore
    })?;

    // Store insert and staff counter move together or not at all.
    let store = repository::create(
        &mut *tx,
        repository::CreateStorePayload {
            short_name: payload.body.short_name,
            display_name: payload.body.display_name,
            phone_number: payload.body.phone_number,
            password_hash,
            latitude: payload.body.latitude,
            longitude: payload.body.longitude,
            subscription: subscription::activate(payload.body.plan_id, Utc::now().naive_utc()),
            added_by: payload.auth.staff.id.clone(),
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::DuplicatePhoneNumber => response::Error::PhoneNumberTaken,
        repository::Error::DuplicateShortName => response::Error::ShortNameTaken,
        _ => response::Error::FailedToCreateStore,
    })?;

    staff::repository::adjust_added_stores(&mut *tx, payload.auth.staff.id, 1)
        .await
        .map_err(|_| response::Error::FailedToCreateStore)?;

    tx.commit()
        .await
        .map(|_| response::Success::StoreCreated(store))
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::FailedToCreateStore
        })
}
