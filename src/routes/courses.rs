use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{api::AppState, models::Course, services};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
}

/// Handler for course title search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<Course>> {
    let courses = services::search(state.catalog.courses(), &params.q)
        .into_iter()
        .cloned()
        .collect();
    Json(courses)
}
