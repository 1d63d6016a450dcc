//! Harvests product listings from a paginated catalog into one record per
//! colour variant.

pub mod dedup;
pub mod dom;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod pagination;
pub mod selectors;
pub mod sink;
pub mod source;

pub use dedup::dedupe;
pub use error::ScraperError;
pub use model::ProductVariant;
pub use pagination::harvest;
pub use selectors::CatalogSelectors;
pub use source::{DocumentSource, HttpSource};
