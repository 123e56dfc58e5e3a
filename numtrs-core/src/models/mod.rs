pub mod query;
pub mod record;

// re-export for cleaner imports
pub use self::query::{DEFAULT_QUERY_END, DEFAULT_QUERY_START, QueryRegion};
pub use self::record::NumtRecord;
