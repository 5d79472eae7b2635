use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::{
    CreatePostRequest, CreateUserRequest, HealthResponse, Post, UpdatePostRequest,
    UpdateUserRequest, User,
};

/// OpenAPI documentation for the resource APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resource Service API",
        version = "1.0.0",
        description = "CRUD resource APIs for posts and users."
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Posts", description = "Post CRUD endpoints"),
        (name = "Users", description = "User CRUD endpoints")
    ),
    paths(
        crate::handlers::get_all_posts,
        crate::handlers::get_post,
        crate::handlers::create_post,
        crate::handlers::update_post,
        crate::handlers::delete_post,
        crate::handlers::get_all_users,
        crate::handlers::check,
        crate::handlers::get_user,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            Post,
            User,
            CreatePostRequest,
            UpdatePostRequest,
            CreateUserRequest,
            UpdateUserRequest,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
