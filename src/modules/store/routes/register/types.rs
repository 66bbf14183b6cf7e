pub mod request {
    use crate::modules::auth::middleware::StaffAuth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 10, max = 15))]
        pub phone_number: String,
        #[validate(length(min = 4, max = 10))]
        pub code: String,
        #[validate(length(min = 3, max = 30))]
        pub short_name: String,
        #[validate(length(min = 1))]
        pub display_name: String,
        #[validate(range(min = -90.0, max = 90.0))]
        pub latitude: f64,
        #[validate(range(min = -180.0, max = 180.0))]
        pub longitude: f64,
        #[validate(length(min = 1))]
        pub plan_id: String,
    }

    pub struct Payload {
        pub auth: StaffAuth,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::store::repository::Store;
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        StoreCreated(Store),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StoreCreated(store) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "message": "Store registered successfully",
                        "store": store,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidCode,
        PhoneNumberTaken,
        ShortNameTaken,
        PlanNotFound,
        FailedToVerifyOtp,
        FailedToCreateStore,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::InvalidCode => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": "Invalid one-time code" })),
                )
                    .into_response(),
                Self::PhoneNumberTaken => (
                    StatusCode::CONFLICT,
                    Json(json!({ "message": "A store with this phone number already exists" })),
                )
                    .into_response(),
                Self::ShortNameTaken => (
                    StatusCode::CONFLICT,
                    Json(json!({ "message": "A store with this short name already exists" })),
                )
                    .into_response(),
                Self::PlanNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "Subscription plan not found" })),
                )
                    .into_response(),
                Self::FailedToVerifyOtp => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to verify one-time code" })),
                )
                    .into_response(),
                Self::FailedToCreateStore => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to register store" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
