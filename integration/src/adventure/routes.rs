use axum::{routing::{get, post}, Router};
use super::handler::{complete_handler, get_level_handler, progress_handler, SharedStore};

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/adventure/level/:num", get(get_level_handler))
        .route("/api/adventure/complete",    post(complete_handler))
        .route("/api/adventure/progress",    get(progress_handler))
        .with_state(store)
}
