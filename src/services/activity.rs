//! Activity directory service — listing, enrollment, and unregistration.
//!
//! DESIGN
//! ======
//! Each operation reads one record, validates it, then issues one atomic
//! participant update. The read and the write are separate store calls, so
//! two concurrent signups for the same activity can both pass validation
//! against the same snapshot and both append. That check-then-act race is
//! accepted; only the append/remove itself is atomic.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are returned untouched to the route layer. A write
//! that reports zero modified records becomes `WriteConflict`; nothing is
//! retried.

use indexmap::IndexMap;
use tracing::info;

use crate::state::Activity;
use crate::store::{ActivityStore, StoreError};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up")]
    AlreadyEnrolled,
    #[error("Max participants reached")]
    CapacityExceeded,
    #[error("Student not registered")]
    NotEnrolled,
    #[error("Failed to update activity")]
    WriteConflict,
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Successful enrollment or unregistration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub activity: String,
    pub email: String,
    pub message: String,
}

// =============================================================================
// QUERIES
// =============================================================================

/// All activities keyed by name, in store order.
///
/// # Errors
///
/// Returns a store error if the read fails.
pub async fn list_activities(store: &dyn ActivityStore) -> Result<IndexMap<String, Activity>, ActivityError> {
    let activities = store.find_all().await?;
    Ok(activities.into_iter().map(|a| (a.name.clone(), a)).collect())
}

async fn find_activity(store: &dyn ActivityStore, name: &str) -> Result<Activity, ActivityError> {
    store
        .find_by_name(name)
        .await?
        .ok_or(ActivityError::NotFound)
}

// =============================================================================
// ENROLLMENT
// =============================================================================

/// Sign `email` up for `activity_name`.
///
/// # Errors
///
/// `NotFound`, `AlreadyEnrolled`, and `CapacityExceeded` are checked in that
/// order against a single read. `WriteConflict` if the append modified
/// nothing.
pub async fn enroll(store: &dyn ActivityStore, activity_name: &str, email: &str) -> Result<Confirmation, ActivityError> {
    let activity = find_activity(store, activity_name).await?;

    if activity.is_enrolled(email) {
        return Err(ActivityError::AlreadyEnrolled);
    }
    if activity.is_full() {
        return Err(ActivityError::CapacityExceeded);
    }

    if store.push_participant(activity_name, email).await? == 0 {
        return Err(ActivityError::WriteConflict);
    }

    let confirmation = Confirmation {
        activity: activity_name.to_owned(),
        email: email.to_owned(),
        message: format!("Signed up {email} for {activity_name}"),
    };
    info!(activity = %confirmation.activity, email = %confirmation.email, "participant enrolled");
    Ok(confirmation)
}

/// Remove `email` from `activity_name`.
///
/// # Errors
///
/// `NotFound` or `NotEnrolled` from the read, `WriteConflict` if the removal
/// modified nothing.
pub async fn unregister(
    store: &dyn ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, ActivityError> {
    let activity = find_activity(store, activity_name).await?;

    if !activity.is_enrolled(email) {
        return Err(ActivityError::NotEnrolled);
    }

    if store.pull_participant(activity_name, email).await? == 0 {
        return Err(ActivityError::WriteConflict);
    }

    let confirmation = Confirmation {
        activity: activity_name.to_owned(),
        email: email.to_owned(),
        message: format!("Unregistered {email} from {activity_name}"),
    };
    info!(activity = %confirmation.activity, email = %confirmation.email, "participant unregistered");
    Ok(confirmation)
}

#[cfg(test)]
#[path = "activity_test.rs"]
mod tests;
