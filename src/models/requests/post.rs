//! Post-related request models.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request payload for creating a post
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    /// Post title
    #[schema(example = "Hello world")]
    pub title: String,
    /// Post body
    #[schema(example = "First post body")]
    pub content: String,
}

/// Request payload for replacing a post's mutable fields
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    /// New title
    #[schema(example = "Updated title")]
    pub title: String,
    /// New body
    #[schema(example = "Updated body")]
    pub content: String,
}
