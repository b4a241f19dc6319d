use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    DatabaseError,
    UpstreamError,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        let message = match *self {
            Self::DatabaseError => "Failed to query the transaction store.",
            Self::UpstreamError => "Failed to fetch seed data.",
        };

        ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
        }
    }
}
