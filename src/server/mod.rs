mod init;
mod state;
pub mod data_models;
pub mod routes;
pub mod store;
pub mod utils;

pub use init::init_router;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::store::StoreError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Internal server error: `{0}`")]
    InternalError(#[from] anyhow::Error),

    #[error("Задача не найдена")]
    TaskNotFound,

    #[error("Задача c id={0} уже есть")]
    TaskConflict(String),

    #[error("Список задач пуст")]
    EmptyStore,

    #[error("{0}")]
    BadRequest(String),
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServerError::TaskNotFound,
            StoreError::Conflict(id) => ServerError::TaskConflict(id),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Error bodies are plain text, newline-terminated.
        let body = format!("{self}\n");
        match self {
            ServerError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            _ => (StatusCode::BAD_REQUEST, body).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        String::from_utf8(bytes.to_vec()).expect("body is not utf-8")
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = ServerError::TaskNotFound.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Задача не найдена\n");
    }

    #[tokio::test]
    async fn test_conflict_response() {
        let response = ServerError::TaskConflict("1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Задача c id=1 уже есть\n");
    }

    #[tokio::test]
    async fn test_internal_error_response() {
        let response =
            ServerError::InternalError(anyhow::anyhow!("encoding failed")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
