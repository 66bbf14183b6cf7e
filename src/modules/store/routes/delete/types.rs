pub mod request {
    use crate::modules::auth::middleware::StaffAuth;

    pub struct Payload {
        pub auth: StaffAuth,
        pub id: String,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;

    pub enum Success {
        StoreDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StoreDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Store deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        StoreNotFound,
        FailedToDeleteStore,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StoreNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "Store not found" })),
                )
                    .into_response(),
                Self::FailedToDeleteStore => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to delete store" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
