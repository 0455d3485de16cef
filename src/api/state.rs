use std::sync::Arc;

use crate::{config::Config, services::Catalog};

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Similar courses listed for an exact title match
    pub recommendation_count: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            recommendation_count: config.recommendation_count,
        }
    }
}
