use sqlx::PgPool;
use sqlx::postgres::PgListener;

use crate::error::Result;
use crate::models::Event;

/// Receives post-update `events` rows published by the `events_notify_change`
/// trigger. Dropping the listener releases its connection.
pub struct EventChangeListener {
    listener: PgListener,
}

impl EventChangeListener {
    pub async fn connect(pool: &PgPool, channel: &str) -> Result<Self> {
        let mut listener = PgListener::connect_with(pool).await?;
        listener.listen(channel).await?;
        tracing::info!(channel, "Listening for event changes");

        Ok(Self { listener })
    }

    /// Waits for the next notification. A malformed payload is returned as
    /// an error without ending the subscription.
    pub async fn next_event(&mut self) -> Result<Event> {
        let notification = self.listener.recv().await?;
        parse_payload(notification.payload())
    }
}

pub fn parse_payload(payload: &str) -> Result<Event> {
    Ok(serde_json::from_str(payload)?)
}
