use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorentError {
    /// Catalog source unreachable or the response is malformed at the top
    /// level. Surfaced to the presentation layer as a persistent empty
    /// state; there is no automatic retry.
    #[error("Catalog fetch failed: {0}")]
    Fetch(String),

    /// A facet value outside its configured domain. Rejected at the
    /// mutation boundary; the prior selection is retained.
    #[error("Invalid facet value: {0}")]
    Validation(String),

    /// A fetched record that fails coercion into the catalog schema.
    /// Such records are excluded from filtering, never surfaced as a
    /// user-visible failure.
    #[error("Malformed catalog record: {0}")]
    Data(String),

    /// Local storage read/write failure. Callers treat reads as empty and
    /// swallow writes.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Car not found: {0}")]
    CarNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MorentError>;
