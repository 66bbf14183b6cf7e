pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(min = 10, max = 15))]
        pub phone_number: String,
        #[validate(length(min = 3, max = 30))]
        pub short_name: String,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        CheckPhoneForOtp,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CheckPhoneForOtp => (
                    StatusCode::OK,
                    Json(json!({ "message": "Check the store phone for a one-time code" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        PhoneNumberTaken,
        ShortNameTaken,
        FailedToSendOtp,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
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
                Self::FailedToSendOtp => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to send one-time code" })),
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
