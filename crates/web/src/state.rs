use axum::extract::FromRef;
use storage::Database;

use crate::live::LiveSchedule;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub schedule: LiveSchedule,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for LiveSchedule {
    fn from_ref(state: &AppState) -> Self {
        state.schedule.clone()
    }
}
