use std::convert::Infallible;
use std::time::Duration;

use axum::{
    Json,
    extract::{Path, State},
    response::sse::{Event as SseEvent, KeepAlive, Sse},
};
use futures_util::Stream;
use storage::{Database, dto::schedule::ScheduleResponse, models::Event};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::error::WebError;
use crate::live::LiveSchedule;

use super::services;

#[utoipa::path(
    get,
    path = "/api/schedule",
    responses(
        (status = 200, description = "Events grouped by category, with live status", body = ScheduleResponse),
        (status = 503, description = "Live updates have stopped")
    ),
    tag = "schedule"
)]
pub async fn get_schedule(
    State(schedule): State<LiveSchedule>,
) -> Result<Json<ScheduleResponse>, WebError> {
    let board = schedule.snapshot().await?;

    Ok(Json(ScheduleResponse::from(&board)))
}

#[utoipa::path(
    get,
    path = "/api/schedule/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Event not found")
    ),
    tag = "schedule"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Event>, WebError> {
    let event = services::get_event(db.pool(), event_id).await?;

    Ok(Json(event))
}

#[utoipa::path(
    get,
    path = "/api/schedule/stream",
    responses(
        (status = 200, description = "SSE stream of `event_updated` messages, one per schedule change"),
        (status = 503, description = "Live updates have stopped")
    ),
    tag = "schedule"
)]
#[tracing::instrument(name = "GET /schedule/stream", skip_all)]
pub async fn stream_schedule(
    State(schedule): State<LiveSchedule>,
) -> Result<Sse<impl Stream<Item = Result<SseEvent, Infallible>>>, WebError> {
    schedule.ensure_live().await?;

    let mut updates = schedule.subscribe();
    tracing::debug!(subscribers = schedule.subscriber_count(), "Schedule subscriber connected");

    // The receiver lives inside the stream; it is dropped with the connection.
    let stream = async_stream::stream! {
        loop {
            match updates.recv().await {
                Ok(event) => match SseEvent::default().event("event_updated").json_data(&event) {
                    Ok(message) => {
                        yield Ok(message);
                    }
                    Err(e) => {
                        tracing::warn!(event_id = %event.event_id, "Failed to encode update: {}", e);
                    }
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Schedule subscriber lagged behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    };

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .text("keep-alive")
            .interval(Duration::from_secs(15)),
    ))
}
