pub mod request {
    pub struct Payload {
        pub short_name: String,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;

    pub enum Success {
        NameAvailable,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NameAvailable => (
                    StatusCode::OK,
                    Json(json!({ "message": "Short name is available" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        NameTaken,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NameTaken => (
                    StatusCode::CONFLICT,
                    Json(json!({ "message": "Short name is already taken" })),
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
