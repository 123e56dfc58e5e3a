use std::fmt::{self, Display};

use crate::errors::NumtError;

/// Default start of the mitochondrial region of interest.
pub const DEFAULT_QUERY_START: u32 = 10761;
/// Default end of the mitochondrial region of interest.
pub const DEFAULT_QUERY_END: u32 = 12137;

///
/// The mitochondrial region being tested for NUMT overlaps.
///
/// Bounds are validated at construction: overlap percentages divide by the
/// region length, so a degenerate region (end <= start) is rejected here
/// rather than left to the arithmetic.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct QueryRegion {
    start: u32,
    end: u32,
}

impl QueryRegion {
    pub fn new(start: u32, end: u32) -> Result<Self, NumtError> {
        if start >= end {
            return Err(NumtError::InvalidQueryBounds { start, end });
        }
        Ok(QueryRegion { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the query region in base pairs.
    pub fn length(&self) -> u32 {
        self.end - self.start
    }
}

impl Default for QueryRegion {
    fn default() -> Self {
        QueryRegion {
            start: DEFAULT_QUERY_START,
            end: DEFAULT_QUERY_END,
        }
    }
}

impl Display for QueryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chrMT:{}-{}", self.start, self.end)
    }
}
