//! API Router with Swagger UI

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ErrorBody;
use super::modules::health::handlers::{health_check, HealthResponse};
use super::modules::users::dto::{UserDto, UserPayload};
use super::modules::users::handlers::{
    create_user, delete_user, get_user, list_users, update_user, UserHandlerState,
};
use super::modules::{health, users};
use crate::application::UserService;
use crate::infrastructure::database::repositories::SeaOrmUserRepository;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        description = "RESTful API for managing user records"
    ),
    paths(
        health::handlers::health_check,
        users::handlers::list_users,
        users::handlers::get_user,
        users::handlers::create_user,
        users::handlers::update_user,
        users::handlers::delete_user,
    ),
    components(schemas(UserDto, UserPayload, ErrorBody, HealthResponse)),
    tags(
        (name = "Users", description = "User CRUD endpoints"),
        (name = "Health", description = "Service liveness")
    )
)]
struct ApiDoc;

/// Build the application router.
///
/// Wiring is explicit: the caller constructs the repository and service
/// once at startup and hands them in; no runtime service registry.
pub fn create_router(user_service: Arc<UserService<SeaOrmUserRepository>>) -> Router {
    let state = UserHandlerState { user_service };

    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/health", get(health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
