use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

/// Explicit routing table: every (path, method) → handler pair for both
/// resources is assembled here at startup.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api-doc/openapi.json", web::get().to(openapi_spec))
        // Post routes
        .service(
            web::scope("/post")
                .route("", web::get().to(handlers::get_all_posts))
                .route("/{id}", web::get().to(handlers::get_post))
                .route("/{user_id}", web::post().to(handlers::create_post))
                .route("/{id}", web::put().to(handlers::update_post))
                .route("/{id}", web::delete().to(handlers::delete_post)),
        )
        // User routes
        .service(
            web::scope("/user")
                .route("", web::get().to(handlers::get_all_users))
                // Fixed-path route must be before /{id} to avoid conflict
                .route("/check", web::get().to(handlers::check))
                .route("/{id}", web::get().to(handlers::get_user))
                .route("", web::post().to(handlers::create_user))
                .route("/{id}", web::put().to(handlers::update_user))
                .route("/{id}", web::delete().to(handlers::delete_user)),
        );
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

async fn openapi_spec() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    use super::configure_routes;
    use crate::models::{Post, User};
    use crate::repositories::{MemoryRepository, Repository};
    use crate::services::{PostService, UserService};

    struct TestApp {
        post_repo: Arc<MemoryRepository<Post>>,
        user_repo: Arc<MemoryRepository<User>>,
    }

    impl TestApp {
        fn new() -> Self {
            Self {
                post_repo: Arc::new(MemoryRepository::new()),
                user_repo: Arc::new(MemoryRepository::new()),
            }
        }
    }

    // The concrete type returned by `init_service` is unnameable, so each
    // test assembles its app through this macro instead of a helper fn.
    macro_rules! init_app {
        ($app:expr) => {{
            let post_service = web::Data::new(PostService::new($app.post_repo.clone()));
            let user_service = web::Data::new(UserService::new($app.user_repo.clone()));
            test::init_service(
                App::new()
                    .app_data(post_service)
                    .app_data(user_service)
                    .configure(configure_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn put_post_replaces_fields_and_preserves_id() {
        let app = TestApp::new();
        app.post_repo
            .save(Post {
                id: Some(1),
                title: "X".to_string(),
                content: "Y".to_string(),
            })
            .unwrap();
        let srv = init_app!(app);

        let req = test::TestRequest::put()
            .uri("/post/1")
            .set_json(json!({ "title": "Z", "content": "Y" }))
            .to_request();
        let resp = test::call_service(&srv, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "id": 1, "title": "Z", "content": "Y" }));
    }

    #[actix_web::test]
    async fn get_missing_post_returns_404() {
        let app = TestApp::new();
        let srv = init_app!(app);

        let req = test::TestRequest::get().uri("/post/99").to_request();
        let resp = test::call_service(&srv, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn put_missing_post_returns_404_without_creating() {
        let app = TestApp::new();
        let srv = init_app!(app);

        let req = test::TestRequest::put()
            .uri("/post/1")
            .set_json(json!({ "title": "Z", "content": "Y" }))
            .to_request();
        let resp = test::call_service(&srv, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(app.post_repo.find_all().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn create_post_persists_body_and_returns_created_record() {
        let app = TestApp::new();
        let srv = init_app!(app);

        let req = test::TestRequest::post()
            .uri("/post/42")
            .set_json(json!({ "title": "Hello", "content": "World" }))
            .to_request();
        let resp = test::call_service(&srv, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Post = test::read_body_json(resp).await;
        assert_eq!(created.id, Some(1));
        assert_eq!(created.title, "Hello");
        assert_eq!(created.content, "World");
        assert_eq!(app.post_repo.find_by_id(1).unwrap(), Some(created));
    }

    #[actix_web::test]
    async fn list_posts_returns_all_records() {
        let app = TestApp::new();
        app.post_repo
            .save(Post {
                id: Some(1),
                title: "a".to_string(),
                content: "a".to_string(),
            })
            .unwrap();
        app.post_repo
            .save(Post {
                id: Some(2),
                title: "b".to_string(),
                content: "b".to_string(),
            })
            .unwrap();
        let srv = init_app!(app);

        let req = test::TestRequest::get().uri("/post").to_request();
        let resp = test::call_service(&srv, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let posts: Vec<Post> = test::read_body_json(resp).await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, Some(1));
    }

    #[actix_web::test]
    async fn user_check_returns_fixed_list() {
        let app = TestApp::new();
        let srv = init_app!(app);

        let req = test::TestRequest::get().uri("/user/check").to_request();
        let resp = test::call_service(&srv, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!(["Success", ""]));
    }

    #[actix_web::test]
    async fn delete_user_then_get_returns_404() {
        let app = TestApp::new();
        app.user_repo
            .save(User {
                id: Some(5),
                username: "gone".to_string(),
                email: "gone@example.com".to_string(),
            })
            .unwrap();
        let srv = init_app!(app);

        let req = test::TestRequest::delete().uri("/user/5").to_request();
        let resp = test::call_service(&srv, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/user/5").to_request();
        let resp = test::call_service(&srv, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_missing_user_is_a_noop() {
        let app = TestApp::new();
        let srv = init_app!(app);

        let req = test::TestRequest::delete().uri("/user/5").to_request();
        let resp = test::call_service(&srv, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn create_user_assigns_server_generated_id() {
        let app = TestApp::new();
        let srv = init_app!(app);

        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "username": "johndoe", "email": "john@example.com" }))
            .to_request();
        let resp = test::call_service(&srv, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: User = test::read_body_json(resp).await;
        assert_eq!(created.id, Some(1));
        assert_eq!(created.username, "johndoe");
    }

    #[actix_web::test]
    async fn health_check_reports_ok() {
        let app = TestApp::new();
        let srv = init_app!(app);

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&srv, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "OK");
    }
}
