use super::types::{request, response};
use crate::{
    modules::{
        auth::service::otp::OtpGateway,
        store::repository::{self, Store},
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

/// The uniqueness pre-check runs before any code is delivered; a collision
/// must not cost an OTP send.
pub(crate) async fn dispatch_otp(
    gateway: &dyn OtpGateway,
    existing: Option<Store>,
    phone_number: &str,
) -> response::Response {
    if let Some(store) = existing {
        return Err(if store.phone_number == phone_number {
            response::Error::PhoneNumberTaken
        } else {
            response::Error::ShortNameTaken
        });
    }

    gateway
        .send(phone_number)
        .await
        .map(|_| response::Success::CheckPhoneForOtp)
        .map_err(|_| response::Error::FailedToSendOtp)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let existing = repository::find_by_phone_number_or_short_name(
        &ctx.db_conn.pool,
        payload.phone_number.clone(),
        payload.short_name.clone(),
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?;

    dispatch_otp(ctx.otp_gateway.as_ref(), existing, &payload.phone_number).await
}

#[cfg(test)]
mod tests {
    use super::super::types::response;
    use super::dispatch_otp;
    use crate::modules::auth::service::otp::testing::{FakeOtpGateway, GatewayCall};
    use crate::modules::store::repository::Store;
    use chrono::Utc;

    fn store_with(phone_number: &str, short_name: &str) -> Store {
        let now = Utc::now().naive_utc();
        Store {
            id: "01J6KQ2V9H8Z4X5C6B7N8M9P0Q".to_string(),
            short_name: short_name.to_string(),
            display_name: "Corner Shop".to_string(),
            phone_number: phone_number.to_string(),
            password_hash: "hash".to_string(),
            latitude: 6.5244,
            longitude: 3.3792,
            is_active: true,
            plan_id: "plan-basic".to_string(),
            subscription_activated_at: now,
            subscription_expires_at: now,
            added_by: "staff-1".to_string(),
            created_at: now,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn phone_collision_reports_conflict_without_sending_a_code() {
        let gateway = FakeOtpGateway::approving("123456");
        let existing = Some(store_with("8012345678", "corner-shop"));

        let result = dispatch_otp(&gateway, existing, "8012345678").await;

        assert!(matches!(result, Err(response::Error::PhoneNumberTaken)));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn short_name_collision_reports_conflict_without_sending_a_code() {
        let gateway = FakeOtpGateway::approving("123456");
        let existing = Some(store_with("8012345678", "corner-shop"));

        let result = dispatch_otp(&gateway, existing, "8099999999").await;

        assert!(matches!(result, Err(response::Error::ShortNameTaken)));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn a_clear_phone_number_gets_a_code() {
        let gateway = FakeOtpGateway::approving("123456");

        let result = dispatch_otp(&gateway, None, "8012345678").await;

        assert!(matches!(result, Ok(response::Success::CheckPhoneForOtp)));
        assert_eq!(
            gateway.calls(),
            vec![GatewayCall::Send("8012345678".to_string())]
        );
    }
}
