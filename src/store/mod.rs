//! Activity record store.
//!
//! DESIGN
//! ======
//! The store is a handle passed into `AppState`, never a process-wide
//! singleton. Each method is a single-record operation; the participant
//! append and removal are the only atomicity boundary the service relies on.
//! Read-validate-write sequences built on top of these calls are not
//! isolated from each other.

pub mod memory;
pub mod postgres;

use crate::state::Activity;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("activity already exists: {0}")]
    Duplicate(String),
    #[error("corrupt activity record: {0}")]
    Corrupt(String),
}

/// Single-record operations over the `activities` collection.
#[async_trait::async_trait]
pub trait ActivityStore: Send + Sync {
    /// Number of stored activity records.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if a record with the same name exists.
    async fn insert(&self, activity: &Activity) -> Result<(), StoreError>;

    /// All records in insertion order.
    async fn find_all(&self) -> Result<Vec<Activity>, StoreError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StoreError>;

    /// Append `email` to the named record's participants. Returns the number
    /// of modified records.
    async fn push_participant(&self, name: &str, email: &str) -> Result<u64, StoreError>;

    /// Remove every occurrence of `email` from the named record's
    /// participants. Returns the number of modified records, which is zero
    /// when the record is missing or does not contain `email`.
    async fn pull_participant(&self, name: &str, email: &str) -> Result<u64, StoreError>;
}
