use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{post, put},
    Json, Router,
};
use serde_json::json;

use super::domain::{
    ActivityGroup, CompetencyDetail, CompetencyGroup, OfficerFormData, WorkAllocationDraft,
};
use super::progress::{ProgressEngine, ProgressView};
use super::session::DraftFeeds;
use super::store::{ProgressSnapshot, ProgressStore};

/// Shared handles behind the work-allocation endpoints.
#[derive(Clone)]
pub struct AllocationState {
    pub engine: Arc<ProgressEngine>,
    pub feeds: Arc<DraftFeeds>,
    pub store: Arc<ProgressStore>,
}

/// Router exposing stateless scoring plus the live draft feeds and store.
pub fn allocation_router(state: AllocationState) -> Router {
    Router::new()
        .route(
            "/api/v1/workallocation/progress",
            post(score_handler).get(progress_handler),
        )
        .route("/api/v1/workallocation/draft/officer", put(officer_handler))
        .route(
            "/api/v1/workallocation/draft/activities",
            put(activities_handler),
        )
        .route(
            "/api/v1/workallocation/draft/competencies",
            put(competencies_handler),
        )
        .route(
            "/api/v1/workallocation/draft/competency-details",
            put(competency_details_handler),
        )
        .with_state(state)
}

pub(crate) async fn score_handler(
    State(state): State<AllocationState>,
    Json(draft): Json<WorkAllocationDraft>,
) -> Json<ProgressView> {
    Json(state.engine.evaluate(&draft).view())
}

pub(crate) async fn progress_handler(
    State(state): State<AllocationState>,
) -> Json<ProgressSnapshot> {
    Json(state.store.latest())
}

pub(crate) async fn officer_handler(
    State(state): State<AllocationState>,
    Json(officer): Json<Option<OfficerFormData>>,
) -> Response {
    state.feeds.set_officer(officer);
    accepted("officer")
}

pub(crate) async fn activities_handler(
    State(state): State<AllocationState>,
    Json(groups): Json<Option<Vec<ActivityGroup>>>,
) -> Response {
    state.feeds.set_activity_groups(groups);
    accepted("activities")
}

pub(crate) async fn competencies_handler(
    State(state): State<AllocationState>,
    Json(groups): Json<Option<Vec<CompetencyGroup>>>,
) -> Response {
    state.feeds.set_competency_groups(groups);
    accepted("competencies")
}

pub(crate) async fn competency_details_handler(
    State(state): State<AllocationState>,
    Json(details): Json<Option<Vec<CompetencyDetail>>>,
) -> Response {
    state.feeds.set_competency_details(details);
    accepted("competency_details")
}

fn accepted(section: &str) -> Response {
    let payload = json!({
        "section": section,
        "status": "accepted",
    });
    (StatusCode::ACCEPTED, Json(payload)).into_response()
}
