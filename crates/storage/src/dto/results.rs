use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::common::PaginationParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResultsFilter {
    /// Only show results for this event.
    pub event_id: Option<Uuid>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ResultsFilter {
    pub fn pagination(&self) -> PaginationParams {
        let defaults = PaginationParams::default();
        PaginationParams {
            page: self.page.unwrap_or(defaults.page),
            page_size: self.page_size.unwrap_or(defaults.page_size),
        }
    }
}

/// One row of the live results board. Names are absent when the result
/// references an event or chest number that is not registered (yet).
#[derive(Debug, Serialize, ToSchema)]
pub struct ResultBoardEntry {
    pub result_id: Uuid,
    pub event_id: Uuid,
    pub event_name: Option<String>,
    pub category: Option<String>,
    pub chest_no: i32,
    pub entry_name: Option<String>,
    pub branch_name: Option<String>,
    pub position: Option<i16>,
    pub grade: Option<String>,
    pub points_awarded: f64,
    pub recorded_at: NaiveDateTime,
}
