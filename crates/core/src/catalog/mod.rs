//! # Catalog
//!
//! The read side of the registry and marketplace screens.
//!
//! - `entry` - the [`CatalogEntry`] trait implemented by projects and credits
//! - `filter` - filter state and the view projection
//! - `source` - data sources (built-in mock data or a JSON document)
//! - `mock` - the built-in data set

pub mod entry;
pub mod filter;
pub mod mock;
pub mod source;

pub use entry::CatalogEntry;
pub use filter::{project, FilterState, Selector};
pub use mock::MockCatalog;
pub use source::{CatalogData, CatalogSource, JsonCatalog};
