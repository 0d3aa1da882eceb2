use axum::{
    Json,
    extract::{Query, State},
};
use storage::{
    Database,
    dto::leaderboard::{LeaderboardQuery, LeaderboardResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboards",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Branch standings, Kalaprathibha and Kalathilakam rankings", body = LeaderboardResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 503, description = "Source data unavailable")
    ),
    tag = "leaderboards"
)]
pub async fn get_leaderboards(
    State(db): State<Database>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>, WebError> {
    query.validate()?;

    let boards = services::get_leaderboards(db.pool()).await?;

    Ok(Json(LeaderboardResponse::new(boards, query.limit)))
}
