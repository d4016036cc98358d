//! User handlers for the `/v1/users` CRUD surface.

use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, info};
use validator::Validate;

use crate::errors::ApiError;
use crate::middleware::RequestExt;
use crate::models::{
    CreateUserRequest, ListUsersQuery, UpdateUserRequest, User, UserLookupResponse, UserResponse,
};
use crate::services::UserService;
use crate::utils::mask_email;
use crate::validators::validation_errors_to_api_error;

fn to_responses(users: Vec<User>) -> Vec<UserResponse> {
    users.into_iter().map(UserResponse::from).collect()
}

async fn find_user(user_service: &UserService, user_id: &str) -> Result<UserResponse, ApiError> {
    let user = user_service
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    Ok(UserResponse::from(user))
}

async fn limited_users(
    user_service: &UserService,
    num: u64,
) -> Result<Vec<UserResponse>, ApiError> {
    let users = user_service.get_users_limited(num).await?;
    debug!("Returning {} of at most {} users", users.len(), num);
    Ok(to_responses(users))
}

/// List all users sorted by name
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "Users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "All users ordered by name", body = [UserResponse]),
        (status = 503, description = "Store unavailable", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_users(
    user_service: web::Data<UserService>,
    query: web::Query<ListUsersQuery>,
) -> Result<HttpResponse, ApiError> {
    let users = user_service.get_all_users(query.direction()).await?;
    Ok(HttpResponse::Ok().json(to_responses(users)))
}

/// Get a user by ID, or a limited listing when the segment is a number
///
/// A segment that parses as a non-negative integer returns up to that many users
/// in storage order. Any other segment is treated as a user ID.
#[utoipa::path(
    get,
    path = "/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID, or a count of users to return")
    ),
    responses(
        (status = 200, description = "The user with this ID, or a list of up to `id` users when the segment is a count", body = UserLookupResponse),
        (status = 400, description = "Invalid user ID", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let segment = path.into_inner();
    let body = match segment.parse::<u64>() {
        Ok(num) => UserLookupResponse::Users(limited_users(&user_service, num).await?),
        Err(_) => UserLookupResponse::User(find_user(&user_service, &segment).await?),
    };
    Ok(HttpResponse::Ok().json(body))
}

/// Get up to `num` users in storage order
#[utoipa::path(
    get,
    path = "/v1/users/limit/{num}",
    tag = "Users",
    params(
        ("num" = u64, Path, description = "Maximum number of users to return")
    ),
    responses(
        (status = 200, description = "Up to `num` users", body = [UserResponse]),
        (status = 422, description = "`num` is not a non-negative integer", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_users_limited(
    user_service: web::Data<UserService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let users = limited_users(&user_service, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Get a user by email address
#[utoipa::path(
    get,
    path = "/v1/users/email/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "Email address")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user_by_email(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    debug!("Looking up user by email: {}", mask_email(&email));

    let user = user_service
        .get_user_by_email(&email)
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 409, description = "Email already registered", body = crate::models::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let created = user_service.create_user(body.into_inner()).await?;
    let response = UserResponse::from(created);

    info!(
        "{} created user {} ({})",
        req.get_caller(),
        response.id,
        mask_email(&response.email)
    );
    Ok(HttpResponse::Created().json(response))
}

/// Update some fields of a user
#[utoipa::path(
    put,
    path = "/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid user ID", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::models::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    body.validate().map_err(validation_errors_to_api_error)?;

    let updated = user_service
        .update_user(&user_id, body.into_inner())
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    info!("{} updated user {}", req.get_caller(), user_id);
    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

/// Delete a user and return the removed record
#[utoipa::path(
    delete,
    path = "/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = UserResponse),
        (status = 400, description = "Invalid user ID", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    let deleted = user_service
        .delete_user(&user_id)
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    info!("{} deleted user {}", req.get_caller(), user_id);
    Ok(HttpResponse::Ok().json(UserResponse::from(deleted)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::middleware::RequestLogger;
    use crate::models::UserResponse;
    use crate::repositories::InMemoryUserRepository;
    use crate::routes::configure_routes;
    use crate::services::UserService;

    macro_rules! init_app {
        () => {
            test::init_service(
                App::new()
                    .wrap(RequestLogger)
                    .app_data(web::Data::new(UserService::new(Arc::new(
                        InMemoryUserRepository::new(),
                    ))))
                    .configure(configure_routes),
            )
            .await
        };
    }

    macro_rules! create {
        ($app:expr, $body:expr) => {{
            let req = test::TestRequest::post()
                .uri("/v1/users/")
                .set_json($body)
                .to_request();
            let resp = test::call_service(&$app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
            let user: UserResponse = test::read_body_json(resp).await;
            user
        }};
    }

    fn names(users: &[UserResponse]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    #[actix_web::test]
    async fn test_create_get_delete_scenario() {
        let app = init_app!();
        let created = create!(app, json!({ "name": "Ann", "email": "ann@x.com" }));
        assert_eq!(created.id.len(), 24);
        assert_eq!(created.name, "Ann");

        let req = test::TestRequest::get()
            .uri(&format!("/v1/users/{}", created.id))
            .to_request();
        let fetched: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::delete()
            .uri(&format!("/v1/users/{}", created.id))
            .to_request();
        let deleted: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(deleted, created);

        let req = test::TestRequest::get()
            .uri(&format!("/v1/users/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "USER_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_list_defaults_to_descending_name_order() {
        let app = init_app!();
        create!(app, json!({ "name": "Bob", "email": "b@x.com" }));
        create!(app, json!({ "name": "Amy", "email": "a@x.com" }));

        let req = test::TestRequest::get().uri("/v1/users").to_request();
        let users: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names(&users), vec!["Bob", "Amy"]);

        let req = test::TestRequest::get().uri("/v1/users/?sort=asc").to_request();
        let users: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names(&users), vec!["Amy", "Bob"]);

        let req = test::TestRequest::get().uri("/v1/users/?sort=upwards").to_request();
        let users: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names(&users), vec!["Bob", "Amy"]);
    }

    #[actix_web::test]
    async fn test_numeric_segment_limits_listing() {
        let app = init_app!();
        create!(app, json!({ "name": "Cy", "email": "c@x.com" }));
        create!(app, json!({ "name": "Al", "email": "a@x.com" }));
        create!(app, json!({ "name": "Bo", "email": "b@x.com" }));

        let req = test::TestRequest::get().uri("/v1/users/2").to_request();
        let users: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names(&users), vec!["Cy", "Al"]);

        let req = test::TestRequest::get().uri("/v1/users/limit/10").to_request();
        let users: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users.len(), 3);

        let req = test::TestRequest::get().uri("/v1/users/0").to_request();
        let users: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;
        assert!(users.is_empty());
    }

    #[actix_web::test]
    async fn test_non_numeric_limit_is_unprocessable() {
        let app = init_app!();
        let req = test::TestRequest::get().uri("/v1/users/limit/ten").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_malformed_id_is_bad_request() {
        let app = init_app!();
        let req = test::TestRequest::get().uri("/v1/users/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_unknown_id_is_not_found_for_update_and_delete() {
        let app = init_app!();
        let unknown = ObjectId::new().to_hex();

        let req = test::TestRequest::put()
            .uri(&format!("/v1/users/{}", unknown))
            .set_json(json!({ "name": "Nobody" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri(&format!("/v1/users/{}", unknown))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let app = init_app!();
        create!(app, json!({ "name": "Ann", "email": "ann@x.com" }));

        let req = test::TestRequest::post()
            .uri("/v1/users")
            .set_json(json!({ "name": "Ann Two", "email": "ann@x.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "EMAIL_EXISTS");

        let req = test::TestRequest::get().uri("/v1/users").to_request();
        let users: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users.len(), 1);
    }

    #[actix_web::test]
    async fn test_missing_required_field_is_unprocessable() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/v1/users")
            .set_json(json!({ "name": "Ann" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert!(body["errors"].is_array());
    }

    #[actix_web::test]
    async fn test_blank_name_and_bad_gender_are_unprocessable() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/v1/users")
            .set_json(json!({ "name": " ", "email": "ann@x.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"], json!(["Name is required"]));

        let req = test::TestRequest::post()
            .uri("/v1/users")
            .set_json(json!({ "name": "Ann", "email": "ann@x.com", "gender": "robot" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_put_updates_only_given_fields() {
        let app = init_app!();
        let created = create!(
            app,
            json!({ "name": "Ann", "email": "ann@x.com", "age": 30, "gender": "Female" })
        );

        let req = test::TestRequest::put()
            .uri(&format!("/v1/users/{}", created.id))
            .set_json(json!({ "email": "ann@y.com" }))
            .to_request();
        let updated: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.email, "ann@y.com");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.age, Some(30));
        assert_eq!(updated.gender, created.gender);
    }

    #[actix_web::test]
    async fn test_lookup_by_email() {
        let app = init_app!();
        let created = create!(app, json!({ "name": "Ann", "email": "ann@x.com" }));

        let req = test::TestRequest::get()
            .uri("/v1/users/email/ann@x.com")
            .to_request();
        let fetched: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::get()
            .uri("/v1/users/email/nobody@x.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_health_and_openapi() {
        let app = init_app!();
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "OK");

        let req = test::TestRequest::get().uri("/openapi.json").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["paths"]["/v1/users"].is_object());
    }
}
