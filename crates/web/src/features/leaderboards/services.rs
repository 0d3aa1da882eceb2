use sqlx::PgPool;
use storage::{
    error::Result,
    repository::leaderboard::LeaderboardRepository,
    services::leaderboard::{Leaderboards, compute_leaderboards},
};

/// Fetch all source tables and compute fresh standings
pub async fn get_leaderboards(pool: &PgPool) -> Result<Leaderboards> {
    let repo = LeaderboardRepository::new(pool);
    let sources = repo.fetch_sources().await?;

    let boards = compute_leaderboards(&sources)?;
    tracing::debug!(
        branches = boards.branches.len(),
        kalaprathibha = boards.kalaprathibha.len(),
        kalathilakam = boards.kalathilakam.len(),
        "Computed leaderboards"
    );

    Ok(boards)
}
