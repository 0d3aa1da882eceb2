use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::common::points;
use crate::dto::results::{ResultBoardEntry, ResultsFilter};
use crate::error::Result;

#[derive(FromRow)]
struct ResultBoardRow {
    result_id: Uuid,
    event_id: Uuid,
    event_name: Option<String>,
    category: Option<String>,
    chest_no: i32,
    entry_name: Option<String>,
    branch_name: Option<String>,
    position: Option<i16>,
    grade: Option<String>,
    points_awarded: Decimal,
    created_at: NaiveDateTime,
}

pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Newest results first, with total row count for pagination.
    pub async fn list_board(&self, filter: &ResultsFilter) -> Result<(Vec<ResultBoardEntry>, i64)> {
        let total_items = self.count(filter).await?;
        let entries = self.fetch_page(filter).await?;

        Ok((entries, total_items))
    }

    async fn count(&self, filter: &ResultsFilter) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM results r WHERE 1=1");
        push_filters(&mut query, filter);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    async fn fetch_page(&self, filter: &ResultsFilter) -> Result<Vec<ResultBoardEntry>> {
        let mut query = page_query(filter);
        let rows: Vec<ResultBoardRow> = query.build_query_as().fetch_all(self.pool).await?;

        let entries = rows
            .into_iter()
            .map(|row| ResultBoardEntry {
                result_id: row.result_id,
                event_id: row.event_id,
                event_name: row.event_name,
                category: row.category,
                chest_no: row.chest_no,
                entry_name: row.entry_name,
                branch_name: row.branch_name,
                position: row.position,
                grade: row.grade,
                points_awarded: points(row.points_awarded),
                recorded_at: row.created_at,
            })
            .collect();

        Ok(entries)
    }
}

/// Ties on `created_at` and `position` fall back to `result_id` so pages
/// never overlap.
fn page_query(filter: &ResultsFilter) -> QueryBuilder<'static, Postgres> {
    let pagination = filter.pagination();

    let mut query = QueryBuilder::new(
        r#"
        SELECT
            r.result_id,
            r.event_id,
            ev.name AS event_name,
            ev.category,
            r.chest_no,
            en.name AS entry_name,
            b.name AS branch_name,
            r.position,
            r.grade,
            r.points_awarded,
            r.created_at
        FROM results r
        LEFT JOIN events ev ON ev.event_id = r.event_id
        LEFT JOIN entries en ON en.chest_no = r.chest_no
        LEFT JOIN branches b ON b.branch_id = en.branch_id
        WHERE 1=1
        "#,
    );
    push_filters(&mut query, filter);

    query.push(" ORDER BY r.created_at DESC, r.position ASC NULLS LAST, r.result_id ASC LIMIT ");
    query.push_bind(pagination.limit());
    query.push(" OFFSET ");
    query.push_bind(pagination.offset());

    query
}

fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &ResultsFilter) {
    if let Some(event_id) = filter.event_id {
        query.push(" AND r.event_id = ");
        query.push_bind(event_id);
    }
}
