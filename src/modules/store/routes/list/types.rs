pub mod request {
    use crate::modules::auth::middleware::StaffAuth;
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub auth: StaffAuth,
        pub pagination: Pagination,
    }
}

pub mod response {
    use crate::modules::store::repository::Store;
    use crate::utils::pagination::Paginated;
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;

    pub enum Success {
        Stores(Paginated<Store>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Stores(stores) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Stores fetched successfully",
                        "items": stores.items,
                        "meta": stores.meta,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchStores,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchStores => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to fetch stores" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
