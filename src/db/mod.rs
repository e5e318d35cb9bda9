pub mod listing;
pub mod rating;
pub mod user;

/// Write-path failure. Unique-constraint violations are surfaced separately
/// because the storage layer is the authoritative duplicate check; the
/// application-level pre-checks only exist for friendlier messages.
#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    #[error("unique constraint {0} violated")]
    Unique(String),
    #[error("{0}")]
    Other(String),
}

impl InsertError {
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505") {
                return InsertError::Unique(db_err.constraint().unwrap_or_default().to_string());
            }
        }
        tracing::error!("Failed to execute query: {:?}", err);
        InsertError::Other("Failed to insert".to_string())
    }

    /// True when the violated constraint name contains `needle`.
    pub fn violates(&self, needle: &str) -> bool {
        matches!(self, InsertError::Unique(constraint) if constraint.contains(needle))
    }
}
