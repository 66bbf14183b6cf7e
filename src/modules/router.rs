use crate::{modules, types::Context};
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/auth", modules::auth::routes::get_router())
        .nest("/stores", modules::store::routes::get_router())
}
