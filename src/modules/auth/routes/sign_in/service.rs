use super::types::{request, response};
use crate::{
    modules::{
        auth::service::{
            password,
            token::{self, TokenKind},
        },
        staff,
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let staff = staff::repository::find_by_email(&ctx.db_conn.pool, payload.email)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::InvalidCredentials)?;

    if !staff.is_active || !password::verify(&payload.password, &staff.password_hash) {
        return Err(response::Error::InvalidCredentials);
    }

    token::mint(&ctx.auth.token_secret, &staff.id, TokenKind::Access)
        .map(response::Success::AccessToken)
        .map_err(|_| response::Error::UnexpectedError)
}
