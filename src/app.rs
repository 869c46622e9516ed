use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/day", get(handlers::get_day))
        .route("/api/history", get(handlers::get_history))
        .route("/api/toggle", post(handlers::toggle_habit))
        .route("/api/habit/add", post(handlers::add_habit))
        .route("/api/habit/delete", post(handlers::delete_habit))
        .route("/api/habit/rename", post(handlers::rename_habit))
        .route("/api/section/add", post(handlers::add_section))
        .route("/api/section/rename", post(handlers::rename_section))
        .route("/api/section/delete", post(handlers::delete_section))
        .route("/api/notes", post(handlers::update_notes))
        .route("/api/reset", post(handlers::reset_day))
        .with_state(state)
}
