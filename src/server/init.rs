use axum::extract::MatchedPath;
use axum::http::Request;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info_span, Span};

use crate::server::routes::{default, tasks};
use crate::server::state::ServerState;

pub fn init_router() -> Router {
    let state = Arc::new(ServerState::new());

    Router::new()
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/:id",
            get(tasks::get_task).delete(tasks::delete_task),
        )
        .route("/health", get(default::health_check))
        .with_state(state)
        .layer((
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    // Log the matched route's path (with placeholders not filled in).
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str);

                    info_span!(
                        "http_request",
                        method = ?request.method(),
                        matched_path,
                    )
                })
                .on_request(|_request: &Request<_>, _span: &Span| {}),
            TimeoutLayer::new(Duration::from_secs(15)),
        ))
}
