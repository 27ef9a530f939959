//! Postgres-backed activity store.
//!
//! DESIGN
//! ======
//! One row per activity, participants held in a `TEXT[]` column so that
//! signup and unregister are single-statement `UPDATE`s. The row's `id`
//! column only fixes insertion order and is never selected.

use sqlx::PgPool;

use super::{ActivityStore, StoreError};
use crate::state::Activity;

type ActivityRow = (String, String, String, i32, Vec<String>);

const SQL_SELECT_ALL: &str = "SELECT name, description, schedule, max_participants, participants
     FROM activities
     ORDER BY id ASC";

const SQL_SELECT_BY_NAME: &str = "SELECT name, description, schedule, max_participants, participants
     FROM activities
     WHERE name = $1";

pub struct PgActivityStore {
    pool: PgPool,
}

impl PgActivityStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_activity((name, description, schedule, max_participants, participants): ActivityRow) -> Result<Activity, StoreError> {
    let max_participants = u32::try_from(max_participants)
        .ok()
        .filter(|max| *max > 0)
        .ok_or_else(|| StoreError::Corrupt(format!("{name}: max_participants {max_participants}")))?;
    Ok(Activity { name, description, schedule, max_participants, participants })
}

#[async_trait::async_trait]
impl ActivityStore for PgActivityStore {
    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activities")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.unsigned_abs())
    }

    async fn insert(&self, activity: &Activity) -> Result<(), StoreError> {
        let max_participants = i32::try_from(activity.max_participants)
            .map_err(|_| StoreError::Corrupt(format!("{}: max_participants too large", activity.name)))?;

        let result = sqlx::query(
            "INSERT INTO activities (name, description, schedule, max_participants, participants)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&activity.name)
        .bind(&activity.description)
        .bind(&activity.schedule)
        .bind(max_participants)
        .bind(&activity.participants)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::Duplicate(activity.name.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_all(&self) -> Result<Vec<Activity>, StoreError> {
        let rows = sqlx::query_as::<_, ActivityRow>(SQL_SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(row_to_activity).collect()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StoreError> {
        let row = sqlx::query_as::<_, ActivityRow>(SQL_SELECT_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_activity).transpose()
    }

    async fn push_participant(&self, name: &str, email: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE activities SET participants = array_append(participants, $2) WHERE name = $1")
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn pull_participant(&self, name: &str, email: &str) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE activities SET participants = array_remove(participants, $2)
             WHERE name = $1 AND $2 = ANY(participants)",
        )
        .bind(name)
        .bind(email)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
