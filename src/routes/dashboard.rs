use axum::{extract::State, Extension, Json};

use crate::{api::AppState, middleware::RequestId, models::Dashboard, services::dashboard};

/// Aggregates for the dashboard charts, recomputed on every call
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<Dashboard> {
    let dashboard = dashboard::compute(state.catalog.courses());

    tracing::info!(
        request_id = %request_id,
        subjects = dashboard.subject_counts.len(),
        years = dashboard.yearly_profit.len(),
        "Computed dashboard"
    );

    Json(dashboard)
}
