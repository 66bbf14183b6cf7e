use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::StaffAuth, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

pub async fn handler(
    auth: StaffAuth,
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    Json(body): Json<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { auth, id, body }).await
}
