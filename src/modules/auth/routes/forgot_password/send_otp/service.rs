use super::types::{request, response};
use crate::{modules::staff, types::Context};
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

    ctx.otp_gateway
        .send(&payload.phone_number)
        .await
        .map(|_| response::Success::CheckPhoneForOtp)
        .map_err(|_| response::Error::FailedToSendOtp)
}
