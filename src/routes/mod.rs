use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::constants::{MSG_HEALTH_STATUS, MSG_SERVER_RUNNING};
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::validators::{json_error_handler, path_error_handler, query_error_handler};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        // Health check
        .route("/health", web::get().to(health_check))
        // Generated API description
        .route("/openapi.json", web::get().to(openapi_json))
        .service(
            web::scope("/v1/users")
                // List users sorted by name
                .route("", web::get().to(handlers::get_users))
                .route("/", web::get().to(handlers::get_users))
                // Create user
                .route("", web::post().to(handlers::create_user))
                .route("/", web::post().to(handlers::create_user))
                // Unambiguous count-limited listing
                .route("/limit/{num}", web::get().to(handlers::get_users_limited))
                // Lookup by the unique email
                .route("/email/{email}", web::get().to(handlers::get_user_by_email))
                // Numeric segment lists up to N users, anything else is a user ID
                .route("/{id}", web::get().to(handlers::get_user))
                .route("/{id}", web::put().to(handlers::update_user))
                .route("/{id}", web::delete().to(handlers::delete_user)),
        );
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: MSG_HEALTH_STATUS.to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
