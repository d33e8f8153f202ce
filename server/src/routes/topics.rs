//! `GET /api/topic_modeling`: serve the precomputed snapshot.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::TopicModelingData;
use tracing::error;

use crate::services::snapshot::{self, SnapshotError};
use crate::state::AppState;

pub(crate) fn snapshot_error_to_status(err: &SnapshotError) -> StatusCode {
    match err {
        SnapshotError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        SnapshotError::Read { .. } | SnapshotError::Decode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Return the snapshot as `{ topics, documents }`.
pub async fn topic_modeling(State(state): State<AppState>) -> Result<Json<TopicModelingData>, StatusCode> {
    snapshot::load_snapshot(state.config.snapshot_path.as_deref())
        .await
        .map(Json)
        .map_err(|e| {
            error!(error = %e, "topic_modeling: snapshot unavailable");
            snapshot_error_to_status(&e)
        })
}
