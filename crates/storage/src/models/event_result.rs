use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventResult {
    pub result_id: Uuid,
    pub chest_no: i32,
    pub event_id: Uuid,
    pub position: Option<i16>,
    pub grade: Option<String>,
    pub points_awarded: Decimal,
}
