pub mod request {
    use crate::modules::auth::middleware::StaffAuth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1))]
        pub current_password: String,
        #[validate(length(min = 8))]
        pub new_password: String,
    }

    pub struct Payload {
        pub auth: StaffAuth,
        pub body: Body,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        PasswordChanged,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PasswordChanged => (
                    StatusCode::OK,
                    Json(json!({ "message": "Password changed successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        IncorrectCurrentPassword,
        FailedToChangePassword,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::IncorrectCurrentPassword => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "message": "Current password is incorrect" })),
                )
                    .into_response(),
                Self::FailedToChangePassword => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to change password" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
