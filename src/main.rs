mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;

use crate::config::{Config, StorageBackend, CONFIG};
use crate::middleware::RequestLogger;
use crate::repositories::{InMemoryUserRepository, MongoUserRepository, UserStore};
use crate::services::UserService;

/// Build the user store selected by configuration.
async fn build_store(config: &Config) -> io::Result<Arc<dyn UserStore>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            info!("Using in-memory user store; data will not survive a restart");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageBackend::MongoDb => {
            info!("Connecting to MongoDB...");
            let client = Client::with_uri_str(&config.mongodb_uri)
                .await
                .map_err(io::Error::other)?;
            let db = client.database(&config.database_name);

            db.run_command(doc! { "ping": 1 })
                .await
                .map_err(io::Error::other)?;
            info!("Connected to MongoDB successfully!");

            Ok(Arc::new(MongoUserRepository::new(&db)))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let store = build_store(&CONFIG).await?;
    let user_service = UserService::new(store);
    user_service
        .init_store()
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;
    let user_service = web::Data::new(user_service);

    let server_addr = CONFIG.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestLogger)
            .wrap(Logger::new("%r -> %s in %Dms"))
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
