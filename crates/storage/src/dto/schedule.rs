use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Event;
use crate::services::schedule::ScheduleBoard;

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleCategory {
    pub category: String,
    pub events: Vec<Event>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleResponse {
    pub total_events: usize,
    pub categories: Vec<ScheduleCategory>,
}

impl From<&ScheduleBoard> for ScheduleResponse {
    fn from(board: &ScheduleBoard) -> Self {
        Self {
            total_events: board.len(),
            categories: board
                .categories()
                .map(|(category, events)| ScheduleCategory {
                    category: category.to_string(),
                    events: events.cloned().collect(),
                })
                .collect(),
        }
    }
}
