use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/sessions/:id", get(handlers::session::get_session))
        .route("/api/sessions/:id", delete(handlers::session::delete_session))
}
