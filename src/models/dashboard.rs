use serde::{Deserialize, Serialize};

/// Parallel label/value sequences feeding a single dashboard chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series<L, V> {
    pub labels: Vec<L>,
    pub values: Vec<V>,
}

impl<L, V> Default for Series<L, V> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<L, V> Series<L, V> {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Value recorded for `label`, if any
    pub fn get(&self, label: &L) -> Option<&V>
    where
        L: PartialEq,
    {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| &self.values[i])
    }
}

impl<L, V> FromIterator<(L, V)> for Series<L, V> {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let (labels, values) = iter.into_iter().unzip();
        Self { labels, values }
    }
}

/// Aggregates rendered on the dashboard page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dashboard {
    /// Courses per subject, most common first
    pub subject_counts: Series<String, u64>,
    /// Courses per level
    pub level_counts: Series<String, u64>,
    /// Courses per `{subject}_{level}` pair
    pub subject_level_counts: Series<String, u64>,
    pub yearly_profit: Series<i32, f64>,
    pub yearly_subscribers: Series<i32, u64>,
    pub monthly_profit: Series<String, f64>,
    pub monthly_subscribers: Series<String, u64>,
}
