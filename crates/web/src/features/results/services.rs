use sqlx::PgPool;
use storage::{
    dto::results::{ResultBoardEntry, ResultsFilter},
    error::Result,
    repository::results::ResultRepository,
};

/// Get the results board with filtering and pagination
pub async fn list_results(
    pool: &PgPool,
    filter: &ResultsFilter,
) -> Result<(Vec<ResultBoardEntry>, i64)> {
    let repo = ResultRepository::new(pool);
    repo.list_board(filter).await
}
