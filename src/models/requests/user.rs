//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request payload for creating a user
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Username
    #[schema(example = "johndoe")]
    pub username: String,
    /// Email address
    #[schema(example = "john@example.com")]
    pub email: String,
}

/// Request payload for replacing a user's mutable fields
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New username
    #[schema(example = "newname")]
    pub username: String,
    /// New email address
    #[schema(example = "new@example.com")]
    pub email: String,
}
