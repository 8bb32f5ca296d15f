use crate::errors::AppError;
use crate::models::{
    DashboardResponse, Habit, NewHabit, NewReminder, NewTask, ProgressResponse, Reminder, Task,
    ThemeSetting,
};
use crate::state::AppState;
use crate::stats::{build_dashboard, build_progress, today_key};
use crate::storage::{persist_habits, persist_reminders, persist_tasks, persist_theme};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&today_key(), data.theme))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_dashboard(&data)))
}

pub async fn get_progress(
    State(state): State<AppState>,
) -> Result<Json<ProgressResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_progress(&data)))
}

pub async fn list_habits(State(state): State<AppState>) -> Result<Json<Vec<Habit>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(data.habits.clone()))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(draft): Json<NewHabit>,
) -> Result<Json<Habit>, AppError> {
    let mut data = state.data.lock().await;
    let habit = data
        .add_habit(draft)
        .ok_or_else(|| AppError::bad_request("habit name must not be empty"))?;
    persist_habits(&state.data_dir, &data.habits).await;
    Ok(Json(habit))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Habit>, AppError> {
    let today = today_key();
    let mut data = state.data.lock().await;
    let habit = data
        .toggle_habit(id, &today)
        .ok_or_else(|| AppError::not_found("no habit with that id"))?;
    persist_habits(&state.data_dir, &data.habits).await;
    Ok(Json(habit))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.remove_habit(id) {
        persist_habits(&state.data_dir, &data.habits).await;
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(data.tasks.clone()))
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(draft): Json<NewTask>,
) -> Result<Json<Task>, AppError> {
    let mut data = state.data.lock().await;
    let task = data
        .add_task(draft)
        .ok_or_else(|| AppError::bad_request("task name must not be empty"))?;
    persist_tasks(&state.data_dir, &data.tasks).await;
    Ok(Json(task))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, AppError> {
    let mut data = state.data.lock().await;
    let task = data
        .toggle_task(id)
        .ok_or_else(|| AppError::not_found("no task with that id"))?;
    persist_tasks(&state.data_dir, &data.tasks).await;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.remove_task(id) {
        persist_tasks(&state.data_dir, &data.tasks).await;
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_reminders(
    State(state): State<AppState>,
) -> Result<Json<Vec<Reminder>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(data.reminders.clone()))
}

pub async fn add_reminder(
    State(state): State<AppState>,
    Json(draft): Json<NewReminder>,
) -> Result<Json<Reminder>, AppError> {
    let mut data = state.data.lock().await;
    let reminder = data
        .add_reminder(draft)
        .ok_or_else(|| AppError::bad_request("reminder text must not be empty"))?;
    persist_reminders(&state.data_dir, &data.reminders).await;
    Ok(Json(reminder))
}

pub async fn toggle_reminder(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Reminder>, AppError> {
    let mut data = state.data.lock().await;
    let reminder = data
        .toggle_reminder(id)
        .ok_or_else(|| AppError::not_found("no reminder with that id"))?;
    persist_reminders(&state.data_dir, &data.reminders).await;
    Ok(Json(reminder))
}

pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.remove_reminder(id) {
        persist_reminders(&state.data_dir, &data.reminders).await;
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_theme(State(state): State<AppState>) -> Result<Json<ThemeSetting>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(ThemeSetting { theme: data.theme }))
}

pub async fn set_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeSetting>,
) -> Result<Json<ThemeSetting>, AppError> {
    let mut data = state.data.lock().await;
    data.theme = payload.theme;
    persist_theme(&state.data_dir, data.theme).await;
    Ok(Json(ThemeSetting { theme: data.theme }))
}
