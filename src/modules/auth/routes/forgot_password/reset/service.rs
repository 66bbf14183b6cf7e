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

/// A token whose phone number no longer matches a staff row must not read
/// as a successful reset.
fn outcome(rows_updated: u64) -> response::Response {
    if rows_updated == 0 {
        return Err(response::Error::InvalidToken);
    }

    Ok(response::Success::PasswordUpdated)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let phone_number = token::validate(
        &ctx.auth.token_secret,
        &payload.reset_token,
        TokenKind::PasswordReset,
    )
    .map_err(|err| match err {
        token::Error::Expired => response::Error::ExpiredToken,
        _ => response::Error::InvalidToken,
    })?;

    let password_hash = password::hash(&payload.new_password)
        .map_err(|_| response::Error::FailedToUpdatePassword)?;

    let rows_updated = staff::repository::update_password_by_phone_number(
        &ctx.db_conn.pool,
        phone_number,
        password_hash,
    )
    .await
    .map_err(|_| response::Error::FailedToUpdatePassword)?;

    outcome(rows_updated)
}

#[cfg(test)]
mod tests {
    use super::super::types::response;
    use super::outcome;

    #[test]
    fn a_reset_that_touched_no_staff_row_is_rejected() {
        assert!(matches!(outcome(0), Err(response::Error::InvalidToken)));
    }

    #[test]
    fn a_reset_that_updated_the_staff_row_succeeds() {
        assert!(matches!(
            outcome(1),
            Ok(response::Success::PasswordUpdated)
        ));
    }
}
