// Error types shared by the catalog, ranking, filtering and selection code
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    // select() / open_hotel() on an id the catalog does not contain
    #[error("Not found: {0}")]
    NotFound(String),

    // Unrecognized sort key, or a key the entity kind cannot be ranked by
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // advance() while nothing is selected
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Duplicate id in catalog: {0}")]
    DuplicateId(String),

    #[error("Seed data parse error: {0}")]
    SeedParse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BookingError>;
