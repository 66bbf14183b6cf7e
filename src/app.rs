use crate::{
    modules,
    types::{Config, Context, ToContext},
};
use axum::{
    http::{header, Method},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub async fn new() -> Self {
        let ctx: Arc<Context> = Arc::new(Config::default().to_context().await);

        let router = Router::new()
            .nest("/api", modules::get_router())
            .with_state(ctx.clone())
            .layer(Extension(ctx.clone()))
            .layer(trace::TraceLayer::new_for_http())
            .layer(
                cors::CorsLayer::new()
                    .allow_methods([
                        Method::OPTIONS,
                        Method::GET,
                        Method::POST,
                        Method::PATCH,
                        Method::DELETE,
                    ])
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                    .allow_origin(cors::Any),
            );

        Self { ctx, router }
    }

    pub async fn serve(self) {
        let listener = TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port))
            .await
            .expect("Failed to bind server address");

        tracing::info!(
            "App is running on {}:{}",
            self.ctx.app.host,
            self.ctx.app.port
        );

        axum::serve(listener, self.router)
            .await
            .expect("Failed to serve app");
    }
}
