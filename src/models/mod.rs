mod course;
mod dashboard;

pub use course::{Course, CourseLink, HomeResponse, Recommendation};
pub use dashboard::{Dashboard, Series};
