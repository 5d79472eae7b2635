//! Post handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};

use crate::errors::ApiError;
use crate::models::{CreatePostRequest, UpdatePostRequest};
use crate::services::PostService;

/// List all posts
#[utoipa::path(
    get,
    path = "/post",
    tag = "Posts",
    responses(
        (status = 200, description = "List of posts", body = Vec<crate::models::Post>)
    )
)]
pub async fn get_all_posts(post_service: web::Data<PostService>) -> Result<HttpResponse, ApiError> {
    let posts = post_service.get_all()?;
    Ok(HttpResponse::Ok().json(posts))
}

/// Get a specific post by ID
#[utoipa::path(
    get,
    path = "/post/{id}",
    tag = "Posts",
    params(
        ("id" = i64, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post found", body = crate::models::Post),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(
    post_service: web::Data<PostService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let post_id = path.into_inner();
    debug!("Fetching post with id: {}", post_id);

    let post = post_service.get_by_id(post_id)?.ok_or_else(|| {
        warn!("Post not found with id: {}", post_id);
        ApiError::NotFound("Post not found".to_string())
    })?;

    Ok(HttpResponse::Ok().json(post))
}

/// Create a new post on behalf of a user
///
/// The author id is part of the route for compatibility with existing
/// callers; posts carry no user relationship, so it is logged and dropped.
#[utoipa::path(
    post,
    path = "/post/{user_id}",
    tag = "Posts",
    params(
        ("user_id" = i64, Path, description = "Id of the authoring user")
    ),
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = crate::models::Post)
    )
)]
pub async fn create_post(
    post_service: web::Data<PostService>,
    path: web::Path<i64>,
    body: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    info!("Creating post on behalf of user: {}", user_id);

    let post = post_service.create(body.into_inner())?;
    Ok(HttpResponse::Created().json(post))
}

/// Update a post's title and content
#[utoipa::path(
    put,
    path = "/post/{id}",
    tag = "Posts",
    params(
        ("id" = i64, Path, description = "Post ID")
    ),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = crate::models::Post),
        (status = 404, description = "Post not found")
    )
)]
pub async fn update_post(
    post_service: web::Data<PostService>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let post_id = path.into_inner();
    info!("Updating post with id: {}", post_id);

    let updated = post_service.update(post_id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a post
#[utoipa::path(
    delete,
    path = "/post/{id}",
    tag = "Posts",
    params(
        ("id" = i64, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post deleted")
    )
)]
pub async fn delete_post(
    post_service: web::Data<PostService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let post_id = path.into_inner();
    post_service.delete(post_id)?;
    Ok(HttpResponse::Ok().finish())
}
