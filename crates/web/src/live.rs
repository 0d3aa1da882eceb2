use std::sync::Arc;

use storage::error::StorageError;
use storage::live::EventChangeListener;
use storage::models::Event;
use storage::services::schedule::{ScheduleBoard, ScheduleChange};
use tokio::sync::{RwLock, broadcast};
use tokio::task::JoinHandle;

use crate::error::WebError;

const UPDATE_BUFFER: usize = 256;

/// The schedule as last seen by this server, plus a fan-out of every
/// update merged into it.
#[derive(Clone)]
pub struct LiveSchedule {
    state: Arc<RwLock<BoardState>>,
    updates: broadcast::Sender<Event>,
}

struct BoardState {
    board: ScheduleBoard,
    /// Set once the listener has stopped. The board no longer follows the database.
    stopped: Option<String>,
}

impl BoardState {
    fn ensure_live(&self) -> Result<(), WebError> {
        match &self.stopped {
            Some(reason) => Err(WebError::Unavailable(format!(
                "Live schedule updates have stopped ({reason})"
            ))),
            None => Ok(()),
        }
    }
}

impl LiveSchedule {
    pub fn new(board: ScheduleBoard) -> Self {
        let (updates, _) = broadcast::channel(UPDATE_BUFFER);
        Self {
            state: Arc::new(RwLock::new(BoardState {
                board,
                stopped: None,
            })),
            updates,
        }
    }

    pub async fn snapshot(&self) -> Result<ScheduleBoard, WebError> {
        let state = self.state.read().await;
        state.ensure_live()?;
        Ok(state.board.clone())
    }

    pub async fn ensure_live(&self) -> Result<(), WebError> {
        self.state.read().await.ensure_live()
    }

    pub async fn mark_stopped(&self, reason: impl Into<String>) {
        self.state.write().await.stopped = Some(reason.into());
    }

    pub async fn apply(&self, event: Event) -> ScheduleChange {
        let change = self.state.write().await.board.apply_update(event.clone());

        // No subscribers is not an error.
        let _ = self.updates.send(event);

        change
    }

    /// Each receiver is released when dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.updates.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.updates.receiver_count()
    }
}

/// Applies notifications one at a time, in the order the database delivers
/// them. If the listener connection fails for good the schedule is marked
/// stopped and the task ends.
pub fn spawn_listener(mut listener: EventChangeListener, schedule: LiveSchedule) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match listener.next_event().await {
                Ok(event) => {
                    let event_id = event.event_id;
                    let change = schedule.apply(event).await;
                    tracing::info!(%event_id, ?change, "Applied schedule update");
                }
                Err(StorageError::Payload(e)) => {
                    tracing::warn!("Ignoring malformed event notification: {}", e);
                }
                Err(e) => {
                    tracing::error!("Event change listener stopped: {}", e);
                    schedule.mark_stopped(e.to_string()).await;
                    break;
                }
            }
        }
    })
}
