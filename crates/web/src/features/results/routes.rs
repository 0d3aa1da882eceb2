use axum::{Router, routing::get};

use super::handlers::list_results;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_results))
}
