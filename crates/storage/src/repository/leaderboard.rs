use sqlx::PgPool;

use crate::error::Result;
use crate::models::{Branch, Entry, Event, EventResult, TeamMember};
use crate::services::leaderboard::LeaderboardSources;

pub struct LeaderboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Reads the five source tables concurrently. Any failed query fails the
    /// whole fetch.
    pub async fn fetch_sources(&self) -> Result<LeaderboardSources> {
        let (branches, events, entries, results, team_members) = tokio::try_join!(
            self.branches(),
            self.events(),
            self.entries(),
            self.results(),
            self.team_members(),
        )?;

        tracing::debug!(
            branches = branches.len(),
            events = events.len(),
            entries = entries.len(),
            results = results.len(),
            team_members = team_members.len(),
            "Fetched leaderboard sources"
        );

        Ok(LeaderboardSources {
            branches: Some(branches),
            events: Some(events),
            entries: Some(entries),
            results: Some(results),
            team_members: Some(team_members),
        })
    }

    async fn branches(&self) -> Result<Vec<Branch>> {
        let branches = sqlx::query_as::<_, Branch>(
            r#"
            SELECT branch_id, name
            FROM branches
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(branches)
    }

    async fn events(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, name, category, event_type, is_championship_event,
                   status, venue, scheduled_at
            FROM events
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    async fn entries(&self) -> Result<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(
            r#"
            SELECT chest_no, name, branch_id, entry_type, gender
            FROM entries
            ORDER BY chest_no
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    async fn results(&self) -> Result<Vec<EventResult>> {
        let results = sqlx::query_as::<_, EventResult>(
            r#"
            SELECT result_id, chest_no, event_id, position, grade, points_awarded
            FROM results
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    async fn team_members(&self) -> Result<Vec<TeamMember>> {
        let members = sqlx::query_as::<_, TeamMember>(
            r#"
            SELECT group_chest_no, member_chest_no
            FROM team_members
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(members)
    }
}
