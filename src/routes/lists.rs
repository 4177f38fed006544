use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    routing::{get, patch, post, put},
};
use serde::Deserialize;

use crate::{
    error::AppError,
    state::AppState,
    store::{
        ItemPatch, ListItem, TodoList,
        entities::{
            DEFAULT_ITEM_CATEGORY, DEFAULT_ITEM_PRIORITY, DEFAULT_LIST_COLOR, DEFAULT_LIST_TYPE,
        },
    },
};

/// Body for creating or replacing a list. Omitted fields fall back to the
/// defaults, matching what the UI sends.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListPayload {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
}

impl Default for ListPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            kind: DEFAULT_LIST_TYPE.to_string(),
            color: DEFAULT_LIST_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: i32,
}

impl Default for ItemPayload {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: DEFAULT_ITEM_CATEGORY.to_string(),
            priority: DEFAULT_ITEM_PRIORITY,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/lists", get(list_lists).post(create_list))
        .route(
            "/api/lists/{id}",
            get(get_list).put(update_list).delete(delete_list),
        )
        .route("/api/lists/{list_id}/items", post(create_item))
        .route(
            "/api/lists/{list_id}/items/{item_id}",
            put(update_item).delete(delete_item),
        )
        .route(
            "/api/lists/{list_id}/items/{item_id}/toggle",
            patch(toggle_item),
        )
        .with_state(state)
}

async fn list_lists(State(state): State<Arc<AppState>>) -> Json<Vec<TodoList>> {
    Json(state.store().lists())
}

async fn get_list(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<TodoList>, AppError> {
    let list = state
        .store()
        .get(id)
        .ok_or_else(|| AppError::not_found("List not found"))?;
    Ok(Json(list))
}

async fn create_list(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ListPayload>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<TodoList>), AppError> {
    let name = normalize_name(&body.name)?;
    let list = state
        .store()
        .create_list(name, &body.description, &body.kind, &body.color);
    let location = format!("/api/lists/{}", list.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(list),
    ))
}

async fn update_list(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(body): Json<ListPayload>,
) -> Result<Json<TodoList>, AppError> {
    let name = normalize_name(&body.name)?;
    let list = state
        .store()
        .update_list(id, name, &body.description, &body.kind, &body.color)
        .ok_or_else(|| AppError::not_found("List not found"))?;
    Ok(Json(list))
}

async fn delete_list(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if !state.store().delete_list(id) {
        return Err(AppError::not_found("List not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn create_item(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    Json(body): Json<ItemPayload>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ListItem>), AppError> {
    let title = normalize_title(&body.title)?;
    let item = state
        .store()
        .add_item(list_id, title, &body.description, &body.category, body.priority)
        .ok_or_else(|| AppError::not_found("List not found"))?;
    // Points at the parent list; items have no standalone GET endpoint.
    let location = format!("/api/lists/{list_id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    ))
}

async fn update_item(
    State(state): State<Arc<AppState>>,
    Path((list_id, item_id)): Path<(i32, i32)>,
    Json(patch): Json<ItemPatch>,
) -> Result<Json<ListItem>, AppError> {
    let item = state
        .store()
        .update_item(list_id, item_id, patch)
        .ok_or_else(|| AppError::not_found("Item not found"))?;
    Ok(Json(item))
}

async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path((list_id, item_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    if !state.store().delete_item(list_id, item_id) {
        return Err(AppError::not_found("Item not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn toggle_item(
    State(state): State<Arc<AppState>>,
    Path((list_id, item_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    if !state.store().toggle_item(list_id, item_id) {
        return Err(AppError::not_found("Item not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

fn normalize_name(name: &str) -> Result<&str, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request("List name is required"));
    }
    Ok(trimmed)
}

fn normalize_title(title: &str) -> Result<&str, AppError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request("Item title is required"));
    }
    Ok(trimmed)
}
