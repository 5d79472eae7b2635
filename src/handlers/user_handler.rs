//! User handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};

use crate::constants::CHECK_STATUS;
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, UpdateUserRequest};
use crate::services::UserService;

/// List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = Vec<crate::models::User>)
    )
)]
pub async fn get_all_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.get_all()?;
    Ok(HttpResponse::Ok().json(users))
}

/// Liveness probe kept for existing callers
///
/// Always answers with the fixed two-element list `["Success", ""]`.
#[utoipa::path(
    get,
    path = "/user/check",
    tag = "Users",
    responses(
        (status = 200, description = "Fixed status list", body = Vec<String>)
    )
)]
pub async fn check() -> HttpResponse {
    HttpResponse::Ok().json([CHECK_STATUS, ""])
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = crate::models::User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = user_service.get_by_id(user_id)?.ok_or_else(|| {
        warn!("User not found with id: {}", user_id);
        ApiError::NotFound("User not found".to_string())
    })?;

    Ok(HttpResponse::Ok().json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = crate::models::User)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service.create(body.into_inner())?;
    Ok(HttpResponse::Created().json(user))
}

/// Update a user's username and email
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = crate::models::User),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    info!("Updating user with id: {}", user_id);

    let updated = user_service.update(user_id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted")
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    user_service.delete(user_id)?;
    Ok(HttpResponse::Ok().finish())
}
