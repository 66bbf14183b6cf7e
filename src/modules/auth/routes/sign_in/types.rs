pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(email)]
        pub email: String,
        #[validate(length(min = 1))]
        pub password: String,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        AccessToken(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AccessToken(access_token) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Signed in successfully",
                        "access_token": access_token,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidCredentials,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "message": "Invalid email or password" })),
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
