use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::Json;
use std::collections::HashMap;
use std::sync::Arc;

use crate::server::data_models::Task;
use crate::server::state::ServerState;
use crate::server::ServerError;

type EmptyJsonReply = (StatusCode, [(header::HeaderName, &'static str); 1]);

fn empty_json_reply(status: StatusCode) -> EmptyJsonReply {
    (status, [(header::CONTENT_TYPE, "application/json")])
}

/// `GET /tasks`. Returns all current tasks as a JSON object keyed by id.
pub async fn list_tasks(
    State(state): State<Arc<ServerState>>,
) -> Result<(StatusCode, Json<HashMap<String, Task>>), ServerError> {
    if state.store.is_empty() {
        return Err(ServerError::EmptyStore);
    }

    Ok((StatusCode::OK, Json(state.store.list())))
}

/// `GET /tasks/:id`
pub async fn get_task(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Task>), ServerError> {
    let task = state.store.get(&id).ok_or(ServerError::TaskNotFound)?;

    Ok((StatusCode::OK, Json(task)))
}

/// `POST /tasks`. Inserts the task from the request body; the id must not
/// already be present. The body is decoded from the raw bytes without a
/// content-type requirement, and decode failures surface the parse error
/// text as a 400.
pub async fn create_task(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<EmptyJsonReply, ServerError> {
    let task: Task =
        serde_json::from_slice(&body).map_err(|err| ServerError::BadRequest(err.to_string()))?;

    state.store.insert(task)?;

    Ok(empty_json_reply(StatusCode::CREATED))
}

/// `DELETE /tasks/:id`
pub async fn delete_task(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<EmptyJsonReply, ServerError> {
    state.store.remove(&id)?;

    Ok(empty_json_reply(StatusCode::OK))
}
