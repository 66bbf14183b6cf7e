use super::service::token::{self, TokenKind};
use crate::modules::staff::{self, repository::Staff};
use crate::types::Context;
use axum::extract::{Extension, FromRequestParts};
use axum::http::{self, request::Parts, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{async_trait, Json, RequestPartsExt};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

enum Error {
    InvalidToken,
}

fn get_token_from_header(header: String) -> Result<String, Error> {
    header
        .split(' ')
        .nth(1)
        .map(|token| token.to_string())
        .ok_or(Error::InvalidToken)
}

async fn get_staff_from_header(ctx: Arc<Context>, header: String) -> Result<Staff, Error> {
    let access_token = get_token_from_header(header)?;
    let staff_id = token::validate(&ctx.auth.token_secret, &access_token, TokenKind::Access)
        .map_err(|_| Error::InvalidToken)?;

    let staff = staff::repository::find_by_id(&ctx.db_conn.pool, staff_id)
        .await
        .map_err(|_| Error::InvalidToken)?
        .ok_or(Error::InvalidToken)?;

    if !staff.is_active {
        return Err(Error::InvalidToken);
    }

    Ok(staff)
}

#[derive(Serialize, Clone)]
pub struct StaffAuth {
    pub staff: Staff,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for StaffAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let err = (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid access token" })),
        );

        let Ok(Extension(ctx)) = parts.extract::<Extension<Arc<Context>>>().await else {
            return Err(err.into_response());
        };

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .ok_or(err.clone().into_response())?;

        get_staff_from_header(ctx, auth_header.to_string())
            .await
            .map(|staff| Self { staff })
            .map_err(|_| err.into_response())
    }
}
