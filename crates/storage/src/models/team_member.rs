use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Links a group entry to one of its individual members.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamMember {
    pub group_chest_no: i32,
    pub member_chest_no: i32,
}
