use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumtError {
    #[error("Invalid query bounds: start ({start}) must be less than end ({end})")]
    InvalidQueryBounds { start: u32, end: u32 },

    #[error("Can't read NUMT table: {0}")]
    FileReadError(String),

    #[error("Missing required column in NUMT table: {0}")]
    MissingColumn(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
