use crate::day;
use crate::errors::AppError;
use crate::history;
use crate::models::{
    AddHabitRequest, AddSectionRequest, DayQuery, DayResponse, DaySnapshot, DeleteHabitRequest,
    DeleteSectionRequest, HistoryQuery, HistoryResponse, NotesRequest, RenameHabitRequest,
    RenameSectionRequest, ResetRequest, ToggleRequest,
};
use crate::state::AppState;
use crate::stats::{day_progress, filter_history, history_series};
use crate::storage::persist_history;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Local;

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

/// Day view for the requested date (today when absent). Visiting a date
/// writes its snapshot back into the history, so an unvisited day
/// materializes as a template entry the chart can see.
pub async fn get_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<DayResponse>, AppError> {
    let date = match query.date {
        Some(date) if !date.is_empty() => date,
        _ => today_string(),
    };

    let mut data = state.data.lock().await;
    let snapshot = history::snapshot_for(&data, &date);
    history::commit(&mut data, date.clone(), snapshot.clone());
    persist_history(&state.data_path, &data).await?;

    Ok(Json(to_day_response(date, snapshot)))
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let data = state.data.lock().await;
    let filtered = filter_history(&data, bound(&query.start), bound(&query.end));
    let (labels, values) = history_series(&filtered);
    Ok(Json(HistoryResponse { labels, values }))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let ToggleRequest { date, section, id } = req;
    apply_edit(&state, date, |snapshot| day::toggle(snapshot, &section, id)).await
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(req): Json<AddHabitRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let AddHabitRequest { date, section, title } = req;
    apply_edit(&state, date, |snapshot| {
        day::add_habit(snapshot, &section, &title)
    })
    .await
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Json(req): Json<DeleteHabitRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let DeleteHabitRequest { date, section, id } = req;
    apply_edit(&state, date, |snapshot| {
        day::delete_habit(snapshot, &section, id)
    })
    .await
}

pub async fn rename_habit(
    State(state): State<AppState>,
    Json(req): Json<RenameHabitRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let RenameHabitRequest {
        date,
        section,
        id,
        title,
    } = req;
    apply_edit(&state, date, |snapshot| {
        day::rename_habit(snapshot, &section, id, &title)
    })
    .await
}

pub async fn add_section(
    State(state): State<AppState>,
    Json(req): Json<AddSectionRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let AddSectionRequest { date, name } = req;
    apply_edit(&state, date, |snapshot| day::add_section(snapshot, &name)).await
}

pub async fn rename_section(
    State(state): State<AppState>,
    Json(req): Json<RenameSectionRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let RenameSectionRequest {
        date,
        old_name,
        new_name,
    } = req;
    apply_edit(&state, date, |snapshot| {
        day::rename_section(snapshot, &old_name, &new_name)
    })
    .await
}

/// The page asks the user before calling this; the API itself deletes
/// unconditionally.
pub async fn delete_section(
    State(state): State<AppState>,
    Json(req): Json<DeleteSectionRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let DeleteSectionRequest { date, section } = req;
    apply_edit(&state, date, |snapshot| {
        day::delete_section(snapshot, &section)
    })
    .await
}

pub async fn update_notes(
    State(state): State<AppState>,
    Json(req): Json<NotesRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let NotesRequest { date, notes } = req;
    apply_edit(&state, date, |snapshot| day::set_notes(snapshot, &notes)).await
}

pub async fn reset_day(
    State(state): State<AppState>,
    Json(req): Json<ResetRequest>,
) -> Result<Json<DayResponse>, AppError> {
    apply_edit(&state, req.date, day::reset_day).await
}

/// Shared mutation path: derive the day's snapshot, run the edit, commit the
/// result and rewrite the data file. The in-memory commit stays applied even
/// when the persist fails, which the caller sees as a 500.
async fn apply_edit<F>(
    state: &AppState,
    date: String,
    edit: F,
) -> Result<Json<DayResponse>, AppError>
where
    F: FnOnce(DaySnapshot) -> DaySnapshot,
{
    let mut data = state.data.lock().await;
    let snapshot = edit(history::snapshot_for(&data, &date));
    history::commit(&mut data, date.clone(), snapshot.clone());
    persist_history(&state.data_path, &data).await?;

    Ok(Json(to_day_response(date, snapshot)))
}

fn to_day_response(date: String, snapshot: DaySnapshot) -> DayResponse {
    DayResponse {
        progress: day_progress(&snapshot),
        date,
        sections: snapshot.sections,
        notes: snapshot.notes,
    }
}

fn bound(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|value| !value.is_empty())
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
