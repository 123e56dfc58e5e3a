use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

///
/// NumtRecord struct, representation of one row of the NUMT annotation table
///
/// Coordinates are on the mitochondrial axis. `start <= end` is not
/// enforced; an inverted row flows through the analysis and yields
/// zero-length overlaps instead of panicking.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct NumtRecord {
    #[serde(rename = "NumtS Code")]
    pub code: String,

    #[serde(rename = "Chr")]
    pub chr: String,

    #[serde(rename = "Mt Start")]
    pub start: u32,

    #[serde(rename = "Mt End")]
    pub end: u32,
}

impl NumtRecord {
    ///
    /// Get length of the record along the mitochondrial axis
    ///
    pub fn width(&self) -> u32 {
        self.end.checked_sub(self.start).unwrap_or(0)
    }
}

impl Display for NumtRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}", self.code, self.chr, self.start, self.end)
    }
}
