use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::landing))
        .route("/planner", get(handlers::planner_page))
        .route("/journal", get(handlers::journal_page))
        .route(
            "/api/planner/:date",
            get(handlers::get_planner).put(handlers::put_planner),
        )
        .route(
            "/api/journal/:date",
            get(handlers::get_journal).put(handlers::put_journal),
        )
        .route("/api/streak", get(handlers::get_streak))
        .route("/api/theme", get(handlers::get_theme).put(handlers::put_theme))
        .with_state(state)
}
