use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/amount", post(handlers::amount_form))
        .route("/range", post(handlers::range_form))
        .route("/api/state", get(handlers::get_state))
        .route("/api/amount", post(handlers::set_amount))
        .route("/api/range", post(handlers::set_range))
        .with_state(state)
}
