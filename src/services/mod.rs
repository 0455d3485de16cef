pub mod catalog;
pub mod dashboard;
pub mod dataset;
pub mod recommendations;
pub mod search;
pub mod similarity;
pub mod stop_words;
pub mod title_index;

pub use catalog::Catalog;
pub use recommendations::{recommend, RecommendError};
pub use search::search;
pub use title_index::TitleLookup;
