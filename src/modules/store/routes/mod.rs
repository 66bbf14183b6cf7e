mod check_name;
mod delete;
mod list;
mod register;
mod send_otp;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/send-otp", send_otp::get_router())
        .nest("/register", register::get_router())
        .merge(check_name::get_router())
        .merge(list::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
}
