pub mod request {
    use crate::modules::auth::middleware::StaffAuth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1))]
        pub display_name: Option<String>,
        #[validate(range(min = -90.0, max = 90.0))]
        pub latitude: Option<f64>,
        #[validate(range(min = -180.0, max = 180.0))]
        pub longitude: Option<f64>,
        pub is_active: Option<bool>,
        #[validate(length(min = 1))]
        pub plan_id: Option<String>,
    }

    pub struct Payload {
        pub auth: StaffAuth,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        StoreUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StoreUpdated => (
                    StatusCode::OK,
                    Json(json!({ "message": "Store updated successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        StoreNotFound,
        PlanNotFound,
        FailedToUpdateStore,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::StoreNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "Store not found" })),
                )
                    .into_response(),
                Self::PlanNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "Subscription plan not found" })),
                )
                    .into_response(),
                Self::FailedToUpdateStore => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to update store" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
