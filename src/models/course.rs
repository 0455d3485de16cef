use serde::{Deserialize, Serialize};

/// One row of the course dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Display title; may repeat across rows
    pub course_title: String,
    /// Normalized title used for similarity, never missing after load
    pub clean_title: String,
    pub url: String,
    pub price: f64,
    pub num_subscribers: u64,
    pub subject: String,
    pub level: String,
    /// Raw publish timestamp, in one of several formats
    pub published_timestamp: String,
}

impl Course {
    /// Profit derived as price times subscriber count
    pub fn profit(&self) -> f64 {
        self.price * self.num_subscribers as f64
    }
}

/// A similar course returned by the recommendation engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub course_title: String,
    pub url: String,
    pub price: f64,
    pub num_subscribers: u64,
    pub similarity_score: f32,
}

impl Recommendation {
    pub fn new(course: &Course, similarity_score: f32) -> Self {
        Self {
            course_title: course.course_title.clone(),
            url: course.url.clone(),
            price: course.price,
            num_subscribers: course.num_subscribers,
            similarity_score,
        }
    }
}

/// Title and link pair listed on the home page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseLink {
    pub course_title: String,
    pub url: String,
}

impl From<&Course> for CourseLink {
    fn from(course: &Course) -> Self {
        Self {
            course_title: course.course_title.clone(),
            url: course.url.clone(),
        }
    }
}

impl From<&Recommendation> for CourseLink {
    fn from(recommendation: &Recommendation) -> Self {
        Self {
            course_title: recommendation.course_title.clone(),
            url: recommendation.url.clone(),
        }
    }
}

/// Home page document: the submitted course plus whatever was found for it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HomeResponse {
    pub course: String,
    pub show_title: bool,
    pub show_error: bool,
    pub courses: Vec<CourseLink>,
}
