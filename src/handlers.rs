use crate::errors::AppError;
use crate::keys::{date_key, parse_date_key};
use crate::models::{
    DateQuery, JournalRequest, JournalResponse, PlannerDayResponse, PlannerRecord, StreakState,
    Theme, ThemeRequest, ThemeResponse,
};
use crate::progress::day_progress;
use crate::state::AppState;
use crate::storage::{persist_data, StoreData};
use crate::streak;
use crate::ui::{render_journal, render_landing, render_planner};
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use std::path::Path as FsPath;
use tracing::error;

pub async fn landing() -> Html<String> {
    Html(render_landing(today()))
}

pub async fn planner_page(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Html<String>, AppError> {
    let date = resolve_date(query.date.as_deref())?;
    let mut store = state.store.lock().await;
    let record = store.planner(date);
    let progress = day_progress(&record);
    let (streak, changed) = refresh_streak(&mut store, date, progress.top3)?;
    if changed {
        persist_best_effort(&state.data_path, &store).await;
    }
    Ok(Html(render_planner(date, today(), &progress, &streak)))
}

pub async fn journal_page(Query(query): Query<DateQuery>) -> Result<Html<String>, AppError> {
    let date = resolve_date(query.date.as_deref())?;
    Ok(Html(render_journal(date, today())))
}

pub async fn get_planner(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<PlannerDayResponse>, AppError> {
    let date = parse_date(&date)?;
    let mut store = state.store.lock().await;
    let record = store.planner(date);
    let progress = day_progress(&record);
    let (streak, changed) = refresh_streak(&mut store, date, progress.top3)?;
    if changed {
        persist_best_effort(&state.data_path, &store).await;
    }

    Ok(Json(PlannerDayResponse {
        date: date_key(date),
        record,
        progress,
        streak,
    }))
}

pub async fn put_planner(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(record): Json<PlannerRecord>,
) -> Result<Json<PlannerDayResponse>, AppError> {
    let date = parse_date(&date)?;
    let mut store = state.store.lock().await;
    store.set_planner(date, &record)?;
    let progress = day_progress(&record);
    let (streak, _) = refresh_streak(&mut store, date, progress.top3)?;
    persist_best_effort(&state.data_path, &store).await;

    Ok(Json(PlannerDayResponse {
        date: date_key(date),
        record,
        progress,
        streak,
    }))
}

pub async fn get_journal(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<JournalResponse>, AppError> {
    let date = parse_date(&date)?;
    let store = state.store.lock().await;
    Ok(Json(JournalResponse {
        date: date_key(date),
        text: store.journal(date),
    }))
}

pub async fn put_journal(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<JournalRequest>,
) -> Result<Json<JournalResponse>, AppError> {
    let date = parse_date(&date)?;
    let mut store = state.store.lock().await;
    store.set_journal(date, payload.text.clone());
    persist_best_effort(&state.data_path, &store).await;

    Ok(Json(JournalResponse {
        date: date_key(date),
        text: payload.text,
    }))
}

pub async fn get_streak(State(state): State<AppState>) -> Json<StreakState> {
    let store = state.store.lock().await;
    Json(store.streak())
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let store = state.store.lock().await;
    Json(ThemeResponse {
        theme: store.theme().as_str().to_string(),
    })
}

pub async fn put_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeRequest>,
) -> Result<Json<ThemeResponse>, AppError> {
    let theme = Theme::parse(payload.theme.trim())
        .ok_or_else(|| AppError::bad_request("theme must be 'light', 'dark' or 'system'"))?;
    let mut store = state.store.lock().await;
    store.set_theme(theme);
    persist_best_effort(&state.data_path, &store).await;

    Ok(Json(ThemeResponse {
        theme: theme.as_str().to_string(),
    }))
}

/// The streak is re-evaluated wherever a planner record is loaded or saved.
/// The step is idempotent for an unchanged (date, completion) pair, so the
/// load path and the save path may both run it.
fn refresh_streak(
    store: &mut StoreData,
    date: NaiveDate,
    top3_complete: bool,
) -> Result<(StreakState, bool), AppError> {
    let current = store.streak();
    let next = streak::observe(&current, date, top3_complete);
    let changed = next != current;
    if changed {
        store.set_streak(&next)?;
    }
    Ok((next, changed))
}

// Write failures are non-fatal: the edit stays in memory for this session.
async fn persist_best_effort(path: &FsPath, store: &StoreData) {
    if let Err(err) = persist_data(path, store).await {
        error!(
            "failed to persist store to {}: {}",
            path.display(),
            err.message
        );
    }
}

fn resolve_date(value: Option<&str>) -> Result<NaiveDate, AppError> {
    match value {
        Some(text) if !text.is_empty() => parse_date(text),
        _ => Ok(today()),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    parse_date_key(value).ok_or_else(|| AppError::invalid_date(value))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
