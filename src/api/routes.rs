use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(crate::api::handlers::chat::chat))
        .route("/users", post(crate::api::handlers::users::create_user))
        .route(
            "/messages",
            get(crate::api::handlers::messages::list_messages),
        )
        .route(
            "/memory/query",
            post(crate::api::handlers::memory::query_memory),
        )
        .route("/health", get(crate::api::handlers::health::health))
}
