pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(min = 1))]
        pub reset_token: String,
        #[validate(length(min = 8))]
        pub new_password: String,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        PasswordUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PasswordUpdated => (
                    StatusCode::OK,
                    Json(json!({ "message": "Password updated successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        ExpiredToken,
        InvalidToken,
        FailedToUpdatePassword,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::ExpiredToken => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": "Reset token has expired" })),
                )
                    .into_response(),
                Self::InvalidToken => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "message": "Invalid reset token" })),
                )
                    .into_response(),
                Self::FailedToUpdatePassword => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to update password" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
