use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::points;
use crate::models::Gender;
use crate::services::leaderboard::{BranchRanking, IndividualRanking, Leaderboards};

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardQuery {
    /// Truncate each ranking to its first `limit` rows.
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BranchStanding {
    pub rank: i64,
    pub branch_id: Uuid,
    pub branch_name: String,
    pub official_points: f64,
    pub total_points: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IndividualStanding {
    pub rank: i64,
    pub chest_no: i32,
    pub name: String,
    pub branch_name: String,
    pub gender: Option<Gender>,
    pub individual_points: f64,
    pub group_points: f64,
    pub total_points: f64,
    pub category_count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub branches: Vec<BranchStanding>,
    pub kalaprathibha: Vec<IndividualStanding>,
    pub kalathilakam: Vec<IndividualStanding>,
}

impl BranchStanding {
    fn ranked(rank: i64, ranking: BranchRanking) -> Self {
        Self {
            rank,
            branch_id: ranking.branch_id,
            branch_name: ranking.branch_name,
            official_points: points(ranking.official_points),
            total_points: points(ranking.total_points),
        }
    }
}

impl IndividualStanding {
    fn ranked(rank: i64, ranking: IndividualRanking) -> Self {
        Self {
            rank,
            chest_no: ranking.chest_no,
            name: ranking.name,
            branch_name: ranking.branch_name,
            gender: ranking.gender,
            individual_points: points(ranking.individual_points),
            group_points: points(ranking.group_points),
            total_points: points(ranking.total_points),
            category_count: ranking.category_count,
        }
    }
}

fn ranked<T, R>(rows: Vec<T>, limit: Option<u32>, to_row: fn(i64, T) -> R) -> Vec<R> {
    let limit = limit.map_or(usize::MAX, |l| l as usize);
    rows.into_iter()
        .take(limit)
        .zip(1..)
        .map(|(row, rank)| to_row(rank, row))
        .collect()
}

impl LeaderboardResponse {
    pub fn new(boards: Leaderboards, limit: Option<u32>) -> Self {
        Self {
            branches: ranked(boards.branches, limit, BranchStanding::ranked),
            kalaprathibha: ranked(boards.kalaprathibha, limit, IndividualStanding::ranked),
            kalathilakam: ranked(boards.kalathilakam, limit, IndividualStanding::ranked),
        }
    }
}
