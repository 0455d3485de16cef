use crate::models::Course;

/// Most results a fallback search returns
pub const SEARCH_LIMIT: usize = 6;

/// Courses whose title contains `term`, ignoring case, most subscribed first
///
/// The term is matched literally. Rows with an empty title never match.
pub fn search<'a>(courses: &'a [Course], term: &str) -> Vec<&'a Course> {
    let needle = term.to_lowercase();

    let mut matches: Vec<&Course> = courses
        .iter()
        .filter(|course| !course.course_title.is_empty())
        .filter(|course| course.course_title.to_lowercase().contains(&needle))
        .collect();

    matches.sort_by(|a, b| b.num_subscribers.cmp(&a.num_subscribers));
    matches.truncate(SEARCH_LIMIT);

    tracing::debug!(term = %term, matches = matches.len(), "Fallback search");

    matches
}
