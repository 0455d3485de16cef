use axum::{extract::State, Extension, Form, Json};
use serde::Deserialize;

use crate::{
    api::AppState,
    middleware::RequestId,
    models::{CourseLink, HomeResponse},
    services::{self, RecommendError},
};

#[derive(Debug, Deserialize)]
pub struct CourseForm {
    pub course: String,
}

/// Empty home page
pub async fn index() -> Json<HomeResponse> {
    Json(HomeResponse::default())
}

/// Recommends courses similar to the submitted title, falling back to a
/// title search when the title is not in the catalog
pub async fn submit(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Form(form): Form<CourseForm>,
) -> Json<HomeResponse> {
    let catalog = &state.catalog;

    let courses: Vec<CourseLink> =
        match services::recommend(catalog, &form.course, state.recommendation_count) {
            Ok(recommendations) => {
                tracing::info!(
                    request_id = %request_id,
                    results = recommendations.len(),
                    "Served recommendations"
                );
                return Json(HomeResponse {
                    courses: dedup_by_title(recommendations.iter().map(CourseLink::from)),
                    course: form.course,
                    show_title: true,
                    show_error: false,
                });
            }
            Err(RecommendError::TitleNotFound(_)) => dedup_by_title(
                services::search(catalog.courses(), &form.course)
                    .into_iter()
                    .map(CourseLink::from),
            ),
        };

    if courses.is_empty() {
        tracing::info!(request_id = %request_id, "No course matched");
    } else {
        tracing::info!(
            request_id = %request_id,
            results = courses.len(),
            "Served fallback search"
        );
    }

    Json(HomeResponse {
        course: form.course,
        show_title: !courses.is_empty(),
        show_error: courses.is_empty(),
        courses,
    })
}

/// The page lists one link per title; a repeated title keeps its first position
fn dedup_by_title(links: impl Iterator<Item = CourseLink>) -> Vec<CourseLink> {
    let mut unique: Vec<CourseLink> = Vec::new();
    for link in links {
        if !unique.iter().any(|seen| seen.course_title == link.course_title) {
            unique.push(link);
        }
    }
    unique
}
