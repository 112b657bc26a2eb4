use async_trait::async_trait;

use crate::customer::CustomerRecord;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("customer {0} not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Read-only lookup over the relational store.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Materializes the full nested record for one customer, or
    /// `DirectoryError::NotFound` when no row matches.
    async fn customer_record(&self, customer_id: i64) -> Result<CustomerRecord, DirectoryError>;
}
