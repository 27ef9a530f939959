//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the activity API and serves the landing page from the static
//! directory under `/static`. `/` redirects to the landing page.

pub mod activities;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const LANDING_PAGE: &str = "/static/index.html";

/// Build the full application router.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(redirect_to_landing_page))
        .route("/activities", get(activities::list_activities))
        .route("/activities/{activity_name}/signup", post(activities::signup))
        .route("/activities/{activity_name}/unregister", post(activities::unregister))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_to_landing_page() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
