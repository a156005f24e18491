use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use adventure_quiz_gen::{
    get_level, progression, stars_for_score, ProgressStore, CANDY_WORLD,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Shared state: the progress store behind a mutex, saved on every change
// ---------------------------------------------------------------------------

pub type SharedStore = Arc<Mutex<ProgressStore>>;

/// Build the shared store, wiring the on-change hook to a JSON save file.
pub fn new_store(save_path: std::path::PathBuf) -> SharedStore {
    let state = std::fs::read_to_string(&save_path)
        .ok()
        .and_then(|raw| progression::from_json(&raw).ok())
        .unwrap_or_default();
    let mut store = ProgressStore::from_state(state);
    store.set_on_change(move |state| {
        // Fire-and-forget: a failed save never blocks gameplay.
        if let Err(err) = std::fs::write(&save_path, progression::to_json(state)) {
            log::warn!("could not persist progress: {err}");
        }
    });
    Arc::new(Mutex::new(store))
}

// ---------------------------------------------------------------------------
// Body types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct CompleteRequest {
    pub level_num: u32,
    pub correct_answers: u32,
}

// ---------------------------------------------------------------------------
// GET /api/adventure/level/{num}
// ---------------------------------------------------------------------------

pub async fn get_level_handler(
    State(store): State<SharedStore>,
    Path(num): Path<u32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let level = get_level(num).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Unknown level: {num}") })),
        )
    })?;

    let unlocked = store.lock().unwrap().level_unlocked(CANDY_WORLD, num);
    if !unlocked {
        return Err((
            StatusCode::FORBIDDEN,
            Json(json!({ "error": format!("Level {num} is still locked") })),
        ));
    }

    // Strip correct_index / explanation from questions sent to the client.
    let public_questions: Vec<Value> = level
        .questions
        .iter()
        .map(|q| {
            json!({
                "id":      q.id,
                "kind":    q.kind,
                "prompt":  q.prompt,
                "options": q.options,
                "emoji":   q.emoji,
            })
        })
        .collect();

    Ok(Json(json!({
        "id":         level.id,
        "level_num":  level.level_num,
        "title":      level.title,
        "emoji":      level.emoji,
        "area":       level.area_label,
        "area_color": level.area_color,
        "questions":  public_questions,
        "reward":     level.reward,
    })))
}

// ---------------------------------------------------------------------------
// POST /api/adventure/complete   body: { level_num, correct_answers }
// ---------------------------------------------------------------------------

pub async fn complete_handler(
    State(store): State<SharedStore>,
    Json(body): Json<CompleteRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let level = get_level(body.level_num).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Unknown level: {}", body.level_num) })),
        )
    })?;

    let stars = stars_for_score(body.correct_answers, level.questions.len() as u32);
    let today = Local::now().date_naive();

    let mut store = store.lock().unwrap();
    store.complete_adventure_level(CANDY_WORLD, &level.id, stars);
    store.award_stars(level.area, stars as f64, today);

    Ok(Json(json!({
        "stars":        stars,
        "total_stars":  store.state().stars,
        "streak":       store.state().streak.count,
        "badges":       store.state().badges,
        "next_unlocked": store.level_unlocked(CANDY_WORLD, body.level_num + 1),
    })))
}

// ---------------------------------------------------------------------------
// GET /api/adventure/progress
// ---------------------------------------------------------------------------

pub async fn progress_handler(State(store): State<SharedStore>) -> Json<Value> {
    let store = store.lock().unwrap();
    Json(serde_json::to_value(store.state()).expect("progression state always serializes"))
}
