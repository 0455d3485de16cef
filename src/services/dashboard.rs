use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Month, NaiveDate};

use crate::models::{Course, Dashboard, Series};

/// Calendar date a course was published, in the timestamp's own offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PublishDate {
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .map(|month| month.name())
            .unwrap_or("")
    }
}

/// Parses an ISO-8601 timestamp with offset, falling back to `month/day/year`
pub fn parse_publish_date(value: &str) -> Option<PublishDate> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z"))
    {
        return Some(PublishDate {
            year: timestamp.year(),
            month: timestamp.month(),
            day: timestamp.day(),
        });
    }

    NaiveDate::parse_from_str(value, "%m/%d/%Y")
        .ok()
        .map(|date| PublishDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        })
}

/// Aggregates the whole table for the dashboard
///
/// Count views cover every row. Profit and subscriber sums only cover rows
/// whose publish date parses.
pub fn compute(courses: &[Course]) -> Dashboard {
    let mut subjects: HashMap<&str, u64> = HashMap::new();
    let mut levels: BTreeMap<&str, u64> = BTreeMap::new();
    let mut subject_levels: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    let mut years: BTreeMap<i32, (f64, u64)> = BTreeMap::new();
    let mut months: BTreeMap<u32, (f64, u64)> = BTreeMap::new();
    let mut undated = 0usize;

    for course in courses {
        *subjects.entry(course.subject.as_str()).or_default() += 1;
        *levels.entry(course.level.as_str()).or_default() += 1;
        *subject_levels
            .entry((course.subject.as_str(), course.level.as_str()))
            .or_default() += 1;

        let Some(date) = parse_publish_date(&course.published_timestamp) else {
            undated += 1;
            continue;
        };

        let profit = course.profit();
        let year = years.entry(date.year).or_default();
        year.0 += profit;
        year.1 += course.num_subscribers;
        let month = months.entry(date.month).or_default();
        month.0 += profit;
        month.1 += course.num_subscribers;
    }

    if undated > 0 {
        tracing::debug!(undated, "Rows without a parsable publish date");
    }

    let mut subject_counts: Vec<(&str, u64)> = subjects.into_iter().collect();
    subject_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let month_name = |month: u32| {
        PublishDate {
            year: 0,
            month,
            day: 1,
        }
        .month_name()
        .to_string()
    };

    Dashboard {
        subject_counts: subject_counts
            .into_iter()
            .map(|(subject, count)| (subject.to_string(), count))
            .collect(),
        level_counts: levels
            .into_iter()
            .map(|(level, count)| (level.to_string(), count))
            .collect(),
        subject_level_counts: subject_levels
            .into_iter()
            .map(|((subject, level), count)| (format!("{subject}_{level}"), count))
            .collect(),
        yearly_profit: years.iter().map(|(&year, &(profit, _))| (year, profit)).collect(),
        yearly_subscribers: years
            .iter()
            .map(|(&year, &(_, subscribers))| (year, subscribers))
            .collect(),
        monthly_profit: months
            .iter()
            .map(|(&month, &(profit, _))| (month_name(month), profit))
            .collect(),
        monthly_subscribers: months
            .iter()
            .map(|(&month, &(_, subscribers))| (month_name(month), subscribers))
            .collect::<Series<String, u64>>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::fixtures::course;

    fn dated(
        title: &str,
        subject: &str,
        level: &str,
        price: f64,
        subscribers: u64,
        published: &str,
    ) -> Course {
        Course {
            subject: subject.to_string(),
            level: level.to_string(),
            price,
            published_timestamp: published.to_string(),
            ..course(title, subscribers)
        }
    }

    fn courses() -> Vec<Course> {
        vec![
            dated("A", "Business Finance", "All Levels", 20.0, 100, "2017-01-18T20:58:58Z"),
            dated("B", "Web Development", "Beginner Level", 0.0, 5000, "2016-03-02T10:00:00+05:30"),
            dated("C", "Web Development", "All Levels", 50.0, 10, "3/15/2016"),
            dated("D", "Musical Instruments", "Beginner Level", 30.0, 40, "not a date"),
            dated("E", "Web Development", "Expert Level", 10.0, 7, "2017-01-01T00:00:00Z"),
        ]
    }

    #[test]
    fn test_parse_publish_date_formats() {
        assert_eq!(
            parse_publish_date("2017-01-18T20:58:58Z"),
            Some(PublishDate { year: 2017, month: 1, day: 18 })
        );
        assert_eq!(
            parse_publish_date("2015-12-31T23:30:00-0500"),
            Some(PublishDate { year: 2015, month: 12, day: 31 })
        );
        assert_eq!(
            parse_publish_date("7/4/2014"),
            Some(PublishDate { year: 2014, month: 7, day: 4 })
        );
        assert_eq!(parse_publish_date("2017-01-18"), None);
        assert_eq!(parse_publish_date(""), None);
    }

    #[test]
    fn test_month_name() {
        let date = PublishDate { year: 2017, month: 9, day: 1 };
        assert_eq!(date.month_name(), "September");
    }

    #[test]
    fn test_counts_cover_every_row() {
        let courses = courses();
        let dashboard = compute(&courses);

        let total = courses.len() as u64;
        assert_eq!(dashboard.subject_counts.values.iter().sum::<u64>(), total);
        assert_eq!(dashboard.level_counts.values.iter().sum::<u64>(), total);
        assert_eq!(dashboard.subject_level_counts.values.iter().sum::<u64>(), total);

        assert_eq!(
            dashboard.subject_counts.labels,
            vec!["Web Development", "Business Finance", "Musical Instruments"]
        );
        assert_eq!(
            dashboard.level_counts.labels,
            vec!["All Levels", "Beginner Level", "Expert Level"]
        );
        assert_eq!(
            dashboard
                .subject_level_counts
                .get(&"Web Development_All Levels".to_string()),
            Some(&1)
        );
    }

    #[test]
    fn test_undated_rows_skip_time_series() {
        let dashboard = compute(&courses());

        assert_eq!(dashboard.yearly_profit.labels, vec![2016, 2017]);
        assert_eq!(dashboard.yearly_profit.values, vec![500.0, 2070.0]);
        assert_eq!(dashboard.yearly_subscribers.values, vec![5010, 107]);

        assert_eq!(dashboard.monthly_subscribers.labels, vec!["January", "March"]);
        assert_eq!(dashboard.monthly_subscribers.values, vec![107, 5010]);
        assert_eq!(dashboard.monthly_profit.get(&"January".to_string()), Some(&2070.0));

        let dated_subscribers: u64 = dashboard.yearly_subscribers.values.iter().sum();
        assert_eq!(dated_subscribers, 100 + 5000 + 10 + 7);
    }

    #[test]
    fn test_empty_table() {
        let dashboard = compute(&[]);
        assert!(dashboard.subject_counts.is_empty());
        assert!(dashboard.yearly_profit.is_empty());
    }
}
