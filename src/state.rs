//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the activity record store behind a trait object so the process
//! entry point decides the backend and tests can swap in the in-memory store.
//! No activity data is cached here; every request goes to the store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::ActivityStore;

// =============================================================================
// ACTIVITY
// =============================================================================

/// An extracurricular activity. Mirrors the `activities` table minus its
/// internal `id` column, which never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    #[must_use]
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// True once the participant list has reached capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ActivityStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
