//! Initial activity data and first-boot seeding.
//!
//! `seed_if_empty` is called once by `main` before the listener binds. The
//! empty check and the inserts are separate store calls, so two processes
//! booting against the same empty store can both decide to seed; the second
//! one then fails on the unique `name` constraint.

use tracing::info;

use crate::state::Activity;
use crate::store::{ActivityStore, StoreError};

fn activity(name: &str, description: &str, schedule: &str, max_participants: u32, participants: [&str; 2]) -> Activity {
    Activity {
        name: name.to_owned(),
        description: description.to_owned(),
        schedule: schedule.to_owned(),
        max_participants,
        participants: participants.iter().map(|p| format!("{p}@mergington.edu")).collect(),
    }
}

/// The fixed activity set a fresh store is populated with.
#[must_use]
pub fn initial_activities() -> Vec<Activity> {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael", "daniel"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma", "sophia"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john", "olivia"],
        ),
        // Sports
        activity(
            "Soccer Team",
            "Join the school soccer team and compete in local leagues",
            "Wednesdays and Fridays, 4:00 PM - 5:30 PM",
            18,
            ["lucas", "mia"],
        ),
        activity(
            "Basketball Club",
            "Practice basketball skills and play friendly matches",
            "Tuesdays, 5:00 PM - 6:30 PM",
            15,
            ["liam", "ava"],
        ),
        // Arts
        activity(
            "Art Club",
            "Explore painting, drawing, and other visual arts",
            "Thursdays, 3:30 PM - 5:00 PM",
            16,
            ["noah", "isabella"],
        ),
        activity(
            "Drama Society",
            "Participate in school plays and drama workshops",
            "Mondays, 4:00 PM - 5:30 PM",
            20,
            ["amelia", "benjamin"],
        ),
        // Academic
        activity(
            "Math Olympiad",
            "Prepare for math competitions and solve challenging problems",
            "Wednesdays, 3:30 PM - 5:00 PM",
            10,
            ["charlotte", "elijah"],
        ),
        activity(
            "Debate Club",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            14,
            ["jack", "harper"],
        ),
    ]
}

/// Insert `initial` into the store if it holds no records. Returns the
/// number of records inserted.
///
/// # Errors
///
/// Returns a store error if the count or any insert fails. Inserts already
/// made before the failure are kept.
pub async fn seed_if_empty(store: &dyn ActivityStore, initial: &[Activity]) -> Result<usize, StoreError> {
    let existing = store.count().await?;
    if existing > 0 {
        info!(existing, "activity store already populated; skipping seed");
        return Ok(0);
    }

    for activity in initial {
        store.insert(activity).await?;
    }

    info!(count = initial.len(), "seeded activity store");
    Ok(initial.len())
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
