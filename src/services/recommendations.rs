use crate::{error::AppError, models::Recommendation};

use super::{catalog::Catalog, title_index::TitleLookup};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Course title not found: {0}")]
    TitleNotFound(String),
}

impl From<RecommendError> for AppError {
    fn from(err: RecommendError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

/// Returns up to `n` courses whose titles are most similar to `title`
///
/// Scores are read from the precomputed matrix and ordered descending; ties
/// keep table order. The query row and any other row with the same title are
/// never recommended.
pub fn recommend(
    catalog: &Catalog,
    title: &str,
    n: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    let row = match catalog.lookup(title) {
        TitleLookup::Found(row) => row,
        TitleLookup::NotFound => return Err(RecommendError::TitleNotFound(title.to_string())),
    };

    let courses = catalog.courses();
    let mut scores: Vec<(usize, f32)> = catalog
        .similarity()
        .row(row)
        .iter()
        .copied()
        .enumerate()
        .filter(|&(other, _)| other != row && courses[other].course_title != title)
        .collect();

    // sort_by is stable, so equal scores stay in row order
    scores.sort_by(|a, b| b.1.total_cmp(&a.1));

    Ok(scores
        .into_iter()
        .take(n)
        .map(|(other, score)| Recommendation::new(&courses[other], score))
        .collect())
}
