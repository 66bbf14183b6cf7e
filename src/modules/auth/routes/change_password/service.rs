use super::types::{request, response};
use crate::{
    modules::{auth::service::password, staff},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if !password::verify(
        &payload.body.current_password,
        &payload.auth.staff.password_hash,
    ) {
        return Err(response::Error::IncorrectCurrentPassword);
    }

    let password_hash = password::hash(&payload.body.new_password)
        .map_err(|_| response::Error::FailedToChangePassword)?;

    staff::repository::update_password_by_id(&ctx.db_conn.pool, payload.auth.staff.id, password_hash)
        .await
        .map(|_| response::Success::PasswordChanged)
        .map_err(|_| response::Error::FailedToChangePassword)
}
