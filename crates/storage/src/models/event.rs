use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "event_type")]
pub enum EventType {
    Individual,
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub event_type: EventType,
    /// Points from championship events count toward official branch standings.
    pub is_championship_event: bool,
    pub status: String,
    pub venue: Option<String>,
    pub scheduled_at: Option<chrono::NaiveDateTime>,
}
