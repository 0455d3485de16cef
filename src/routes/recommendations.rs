use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    api::AppState,
    error::{AppError, AppResult},
    middleware::RequestId,
    models::Recommendation,
    services,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub title: String,
    pub n: Option<usize>,
}

/// Similar courses for an exact title; unknown titles are a 404
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<Vec<Recommendation>>> {
    if params.title.trim().is_empty() {
        return Err(AppError::InvalidInput("title must not be empty".to_string()));
    }
    let n = params.n.unwrap_or(state.recommendation_count);

    let recommendations = services::recommend(&state.catalog, &params.title, n)?;

    tracing::info!(
        request_id = %request_id,
        title = %params.title,
        results = recommendations.len(),
        "Served recommendations"
    );

    Ok(Json(recommendations))
}
