use sqlx::PgPool;
use storage::{
    error::Result,
    models::Event,
    repository::event::EventRepository,
    services::schedule::ScheduleBoard,
};
use uuid::Uuid;

/// Load every event and group it into the initial schedule board
pub async fn load_schedule(pool: &PgPool) -> Result<ScheduleBoard> {
    let repo = EventRepository::new(pool);
    let events = repo.list_schedule().await?;

    Ok(ScheduleBoard::from_events(events))
}

/// Get a single event straight from the database
pub async fn get_event(pool: &PgPool, event_id: Uuid) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(event_id).await
}
