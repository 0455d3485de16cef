use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::Course,
};

/// Row as it appears in the dataset file; only the columns we use are read
#[derive(Debug, Deserialize)]
struct RawCourse {
    #[serde(default)]
    course_title: Option<String>,
    #[serde(rename = "Clean_title", default)]
    clean_title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    price: String,
    num_subscribers: String,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    published_timestamp: Option<String>,
}

/// Loads the course table from a CSV file
///
/// Any failure here is fatal for the service: the dataset ships with the
/// deployment and is never user input.
pub fn load_courses(path: impl AsRef<Path>) -> AppResult<Vec<Course>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let courses = read_courses(file)?;

    tracing::info!(
        path = %path.display(),
        rows = courses.len(),
        "Loaded course dataset"
    );

    Ok(courses)
}

/// Parses course rows from any CSV source with a header row
pub fn read_courses<R: Read>(source: R) -> AppResult<Vec<Course>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);

    let mut courses = Vec::new();
    for (index, record) in reader.deserialize::<RawCourse>().enumerate() {
        let row = index + 1;
        let raw = record?;
        courses.push(Course {
            price: parse_price(&raw.price).ok_or_else(|| AppError::InvalidRecord {
                row,
                message: format!("unparsable price {:?}", raw.price),
            })?,
            num_subscribers: parse_count(&raw.num_subscribers).ok_or_else(|| {
                AppError::InvalidRecord {
                    row,
                    message: format!("unparsable subscriber count {:?}", raw.num_subscribers),
                }
            })?,
            course_title: raw.course_title.unwrap_or_default(),
            clean_title: raw.clean_title.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            subject: raw.subject.unwrap_or_default(),
            level: raw.level.unwrap_or_default(),
            published_timestamp: raw.published_timestamp.unwrap_or_default(),
        });
    }

    Ok(courses)
}

/// Coerces a price cell to floating point; `Free` reads as zero
fn parse_price(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("free") {
        return Some(0.0);
    }
    value.parse::<f64>().ok().filter(|price| price.is_finite())
}

/// Subscriber counts are integers, but tolerate an exported `1234.0`
fn parse_count(value: &str) -> Option<u64> {
    let value = value.trim();
    value.parse::<u64>().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|count| count.is_finite() && *count >= 0.0 && count.fract() == 0.0)
            .map(|count| count as u64)
    })
}
