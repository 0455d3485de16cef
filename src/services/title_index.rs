use std::collections::HashMap;

use crate::models::Course;

/// Outcome of resolving a course title to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleLookup {
    Found(usize),
    NotFound,
}

/// Maps each distinct course title to the first row carrying it
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    rows: HashMap<String, usize>,
    shadowed: usize,
}

impl TitleIndex {
    pub fn new(courses: &[Course]) -> Self {
        let mut rows = HashMap::with_capacity(courses.len());
        let mut shadowed = 0;

        for (row, course) in courses.iter().enumerate() {
            if rows.contains_key(&course.course_title) {
                shadowed += 1;
            } else {
                rows.insert(course.course_title.clone(), row);
            }
        }

        Self { rows, shadowed }
    }

    /// Exact, case-sensitive title lookup
    pub fn lookup(&self, title: &str) -> TitleLookup {
        match self.rows.get(title) {
            Some(&row) => TitleLookup::Found(row),
            None => TitleLookup::NotFound,
        }
    }

    /// Number of distinct titles
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows unreachable by exact title because an earlier row has the same title
    pub fn shadowed(&self) -> usize {
        self.shadowed
    }
}
