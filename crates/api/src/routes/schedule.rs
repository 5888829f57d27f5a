use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/schedule", post(handlers::schedule::schedule_interview))
        .route(
            "/api/schedule/match",
            post(handlers::schedule::match_availability),
        )
}
