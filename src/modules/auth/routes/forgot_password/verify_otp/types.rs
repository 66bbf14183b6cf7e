pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(min = 10, max = 15))]
        pub phone_number: String,
        #[validate(length(min = 4, max = 10))]
        pub code: String,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ResetToken(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ResetToken(reset_token) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Code verified successfully",
                        "reset_token": reset_token,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        StaffNotFound,
        InvalidCode,
        FailedToVerifyOtp,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::StaffNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "No staff account found for this phone number" })),
                )
                    .into_response(),
                Self::InvalidCode => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": "Invalid one-time code" })),
                )
                    .into_response(),
                Self::FailedToVerifyOtp => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to verify one-time code" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Sorry, an error occurred" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
