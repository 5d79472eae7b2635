mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use crate::config::CONFIG;
use crate::models::{Post, User};
use crate::repositories::MemoryRepository;
use crate::services::{PostService, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Explicit wiring: each service holds a reference to its own repository,
    // each handler reaches its service through app data. The two resource
    // stacks share no state.
    let post_repository = Arc::new(MemoryRepository::<Post>::new());
    let user_repository = Arc::new(MemoryRepository::<User>::new());

    let post_service = web::Data::new(PostService::new(post_repository));
    let user_service = web::Data::new(UserService::new(user_repository));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(post_service.clone())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
