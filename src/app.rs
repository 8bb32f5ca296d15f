use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/habits", get(handlers::list_habits).post(handlers::add_habit))
        .route("/api/habits/:id/toggle", post(handlers::toggle_habit))
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .route("/api/tasks", get(handlers::list_tasks).post(handlers::add_task))
        .route("/api/tasks/:id/toggle", post(handlers::toggle_task))
        .route("/api/tasks/:id", delete(handlers::delete_task))
        .route("/api/reminders", get(handlers::list_reminders).post(handlers::add_reminder))
        .route("/api/reminders/:id/toggle", post(handlers::toggle_reminder))
        .route("/api/reminders/:id", delete(handlers::delete_reminder))
        .route("/api/theme", get(handlers::get_theme).put(handlers::set_theme))
        .with_state(state)
}
