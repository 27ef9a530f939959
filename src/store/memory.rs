//! In-memory activity store.
//!
//! Each method takes the lock once, so a single call is all-or-nothing in
//! the same way a document update is. Nothing spans calls.

use tokio::sync::RwLock;

use super::{ActivityStore, StoreError};
use crate::state::Activity;

#[derive(Default)]
pub struct MemoryActivityStore {
    activities: RwLock<Vec<Activity>>,
}

impl MemoryActivityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `activities`, kept in the given order.
    #[cfg(test)]
    #[must_use]
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self { activities: RwLock::new(activities) }
    }
}

#[async_trait::async_trait]
impl ActivityStore for MemoryActivityStore {
    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.activities.read().await.len() as u64)
    }

    async fn insert(&self, activity: &Activity) -> Result<(), StoreError> {
        let mut activities = self.activities.write().await;
        if activities.iter().any(|a| a.name == activity.name) {
            return Err(StoreError::Duplicate(activity.name.clone()));
        }
        activities.push(activity.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Activity>, StoreError> {
        Ok(self.activities.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StoreError> {
        Ok(self
            .activities
            .read()
            .await
            .iter()
            .find(|a| a.name == name)
            .cloned())
    }

    async fn push_participant(&self, name: &str, email: &str) -> Result<u64, StoreError> {
        let mut activities = self.activities.write().await;
        let Some(activity) = activities.iter_mut().find(|a| a.name == name) else {
            return Ok(0);
        };
        activity.participants.push(email.to_owned());
        Ok(1)
    }

    async fn pull_participant(&self, name: &str, email: &str) -> Result<u64, StoreError> {
        let mut activities = self.activities.write().await;
        let Some(activity) = activities.iter_mut().find(|a| a.name == name) else {
            return Ok(0);
        };
        let before = activity.participants.len();
        activity.participants.retain(|p| p != email);
        Ok(u64::from(activity.participants.len() != before))
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
