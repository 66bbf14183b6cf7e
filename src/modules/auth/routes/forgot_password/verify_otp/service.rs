use super::types::{request, response};
use crate::{
    modules::{
        auth::service::token::{self, TokenKind},
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

    staff::repository::find_by_phone_number(&ctx.db_conn.pool, payload.phone_number.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::StaffNotFound)?;

    let verification = ctx
        .otp_gateway
        .verify(&payload.phone_number, &payload.code)
        .await
        .map_err(|_| response::Error::FailedToVerifyOtp)?;

    if !verification.is_approved() {
        return Err(response::Error::InvalidCode);
    }

    token::mint(
        &ctx.auth.token_secret,
        &payload.phone_number,
        TokenKind::PasswordReset,
    )
    .map(response::Success::ResetToken)
    .map_err(|_| response::Error::UnexpectedError)
}
