//! Activity listing and signup routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::services::activity::{self, ActivityError, Confirmation};
use crate::state::{Activity, AppState};

/// `?email=` query. Optional at the extractor so a missing value still gets
/// a `{"detail": ...}` body.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    fn require(self) -> Result<String, ApiError> {
        self.email.ok_or_else(|| ApiError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: "Missing query parameter: email".to_owned(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<Confirmation> for MessageResponse {
    fn from(confirmation: Confirmation) -> Self {
        Self { message: confirmation.message }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

pub(crate) fn activity_error_to_status(err: &ActivityError) -> StatusCode {
    match err {
        ActivityError::NotFound => StatusCode::NOT_FOUND,
        ActivityError::AlreadyEnrolled | ActivityError::CapacityExceeded | ActivityError::NotEnrolled => {
            StatusCode::BAD_REQUEST
        }
        ActivityError::WriteConflict | ActivityError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Route-level error: status plus a `{"detail": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        let status = activity_error_to_status(&err);
        // Store failures carry driver text; keep it in the logs only.
        let detail = match err {
            ActivityError::Store(_) => "Internal server error".to_owned(),
            other => other.to_string(),
        };
        Self { status, detail }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "detail": self.detail }))).into_response()
    }
}

fn reject(activity: &str, err: ActivityError) -> ApiError {
    if activity_error_to_status(&err).is_server_error() {
        error!(%activity, error = %err, "activity request failed");
    } else {
        warn!(%activity, error = %err, "activity request rejected");
    }
    err.into()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /activities` — all activities keyed by name, in store order.
pub async fn list_activities(State(state): State<AppState>) -> Result<Json<IndexMap<String, Activity>>, ApiError> {
    match activity::list_activities(state.store.as_ref()).await {
        Ok(activities) => Ok(Json(activities)),
        Err(e) => {
            error!(error = %e, "listing activities failed");
            Err(e.into())
        }
    }
}

/// `POST /activities/:activity_name/signup?email=` — sign a student up.
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = query.require()?;
    let confirmation = activity::enroll(state.store.as_ref(), &activity_name, &email)
        .await
        .map_err(|e| reject(&activity_name, e))?;
    Ok(Json(confirmation.into()))
}

/// `POST /activities/:activity_name/unregister?email=` — remove a student.
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = query.require()?;
    let confirmation = activity::unregister(state.store.as_ref(), &activity_name, &email)
        .await
        .map_err(|e| reject(&activity_name, e))?;
    Ok(Json(confirmation.into()))
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
