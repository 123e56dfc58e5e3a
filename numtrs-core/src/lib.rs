//! Core library for numtrs: shared models, error type, and table I/O for
//! NUMT (nuclear mitochondrial DNA segment) overlap analysis.

pub mod errors;
pub mod io;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use self::errors::NumtError;
pub use self::models::{NumtRecord, QueryRegion};
