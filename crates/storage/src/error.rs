use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Malformed change notification: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Whether the backend itself rejected or failed a query.
    pub fn is_query_failure(&self) -> bool {
        matches!(self, StorageError::Database(_))
    }

    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            StorageError::Database(
                sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_unavailable_message_is_descriptive() {
        let error = StorageError::DataUnavailable("results, team_members".to_string());
        assert_eq!(error.to_string(), "Data unavailable: results, team_members");
        assert!(!error.is_query_failure());
    }

    #[test]
    fn test_pool_timeout_is_connection_failure() {
        let error = StorageError::from(sqlx::Error::PoolTimedOut);
        assert!(error.is_query_failure());
        assert!(error.is_connection_failure());
        assert!(!StorageError::NotFound.is_connection_failure());
    }
}
