use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::StaffAuth, types::Context};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

pub async fn handler(
    auth: StaffAuth,
    State(ctx): State<Arc<Context>>,
    Json(body): Json<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { auth, body }).await
}
