use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use chrono::Utc;
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;
use crate::users::user_handlers;

/// Assemble the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome_handler))
        .route("/hello/{name}", get(hello_handler))
        .route("/info", get(info_handler))
        .route("/health", get(health_handler))
        .merge(create_users_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// User CRUD routes. The collection path is registered with and without a
/// trailing slash; both forms hit the same handlers.
fn create_users_router() -> Router<AppState> {
    let collection = get(user_handlers::list_users_handler)
        .post(user_handlers::create_user_handler);

    Router::new()
        .route("/users", collection.clone())
        .route("/users/", collection)
        .route(
            "/users/{id}",
            get(user_handlers::get_user_handler)
                .put(user_handlers::update_user_handler)
                .delete(user_handlers::delete_user_handler),
        )
}

async fn welcome_handler() -> Json<Value> {
    Json(json!({
        "message": "Roster user directory is running",
        "database": "MongoDB",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn hello_handler(Path(name): Path<String>) -> Json<Value> {
    Json(json!({ "message": format!("Hello, {name}!") }))
}

async fn info_handler() -> Json<Value> {
    Json(json!({
        "app_name": "roster-server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

/// Service + store health. Always 200; a store that fails its ping is
/// reported as unhealthy in the body rather than as an HTTP failure.
async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let db_healthy = state.users.ping().await;
    Json(json!({
        "status": if db_healthy { "healthy" } else { "unhealthy" },
        "database": if db_healthy { "connected" } else { "disconnected" },
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
