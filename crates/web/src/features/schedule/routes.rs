use axum::{Router, routing::get};

use super::handlers::{get_event, get_schedule, stream_schedule};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_schedule))
        .route("/stream", get(stream_schedule))
        .route("/events/:event_id", get(get_event))
}
