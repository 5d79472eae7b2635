use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Whether the request was successful (always false for errors)
    #[schema(example = false)]
    pub success: bool,
    /// Error message
    #[schema(example = "An error occurred")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound(String),
    InternalServerError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::InternalServerError(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            // Absent records answer with an empty 404 body on every lookup
            // path, matching the delete semantics of the resource endpoints.
            ApiError::NotFound(_) => HttpResponse::NotFound().finish(),
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(ErrorResponse {
                    success: false,
                    message: message.clone(),
                })
            }
        }
    }
}
