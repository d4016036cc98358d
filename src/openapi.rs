use utoipa::OpenApi;

use crate::models::{
    CreateUserRequest, ErrorResponse, Gender, HealthResponse, UpdateUserRequest,
    UserLookupResponse, UserResponse,
};

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD API",
        version = "1.0.0",
        description = "REST API for creating, listing, updating and deleting users.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User CRUD endpoints")
    ),
    paths(
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::get_users_limited,
        crate::handlers::get_user_by_email,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            CreateUserRequest,
            UpdateUserRequest,
            Gender,
            UserResponse,
            UserLookupResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
