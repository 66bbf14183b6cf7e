pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(min = 1))]
        pub full_name: String,
        #[validate(email)]
        pub email: String,
        #[validate(length(min = 10, max = 15))]
        pub phone_number: String,
        #[validate(length(min = 8))]
        pub password: String,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        StaffCreated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StaffCreated => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Staff account created successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        StaffAlreadyExists,
        FailedToCreateStaff,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    crate::utils::validation::into_response(errors).into_response()
                }
                Self::StaffAlreadyExists => (
                    StatusCode::CONFLICT,
                    Json(json!({ "message": "A staff with this email or phone number already exists" })),
                )
                    .into_response(),
                Self::FailedToCreateStaff => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to create staff account" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
