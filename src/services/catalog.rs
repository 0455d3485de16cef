use std::path::Path;

use crate::{error::AppResult, models::Course};

use super::{
    dataset,
    similarity::{self, CountVectorizer, SimilarityMatrix},
    title_index::{TitleIndex, TitleLookup},
};

/// Everything requests read from: the course table plus the indexes built
/// over it. Constructed once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    vectorizer: CountVectorizer,
    similarity: SimilarityMatrix,
    titles: TitleIndex,
}

impl Catalog {
    /// Builds the indexes over an already loaded table
    pub fn new(courses: Vec<Course>) -> Self {
        let clean_titles: Vec<&str> = courses.iter().map(|c| c.clean_title.as_str()).collect();
        let (vectorizer, similarity) = similarity::build(&clean_titles);
        let titles = TitleIndex::new(&courses);

        if titles.shadowed() > 0 {
            tracing::warn!(
                shadowed = titles.shadowed(),
                "Duplicate course titles resolve to their first row only"
            );
        }

        Self {
            courses,
            vectorizer,
            similarity,
            titles,
        }
    }

    /// Loads the dataset at `path` and builds the catalog over it
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let courses = dataset::load_courses(path)?;
        let catalog = Self::new(courses);

        tracing::info!(
            rows = catalog.len(),
            vocabulary = catalog.vectorizer.vocabulary_size(),
            distinct_titles = catalog.titles.len(),
            "Course catalog ready"
        );

        Ok(catalog)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn vectorizer(&self) -> &CountVectorizer {
        &self.vectorizer
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn lookup(&self, title: &str) -> TitleLookup {
        self.titles.lookup(title)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
