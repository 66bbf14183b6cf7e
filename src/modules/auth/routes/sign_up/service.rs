use super::types::{request, response};
use crate::{
    modules::{auth::service::password, staff},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let password_hash =
        password::hash(&payload.password).map_err(|_| response::Error::FailedToCreateStaff)?;

    staff::repository::create(
        &ctx.db_conn.pool,
        staff::repository::CreateStaffPayload {
            full_name: payload.full_name,
            email: payload.email,
            phone_number: payload.phone_number,
            password_hash,
        },
    )
    .await
    .map(|_| response::Success::StaffCreated)
    .map_err(|err| match err {
        staff::repository::Error::DuplicateStaff => response::Error::StaffAlreadyExists,
        _ => response::Error::FailedToCreateStaff,
    })
}
