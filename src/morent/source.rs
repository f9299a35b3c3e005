//! Catalog source: the external content store the engine fetches from.
//!
//! The source contract is deliberately thin: one fetch returns the full
//! candidate set as dynamic JSON documents, with no pagination, filtering
//! or ordering guarantees. All filtering happens client-side in the
//! engine. Decoding into typed records happens here at the boundary;
//! malformed documents are excluded fail-safe rather than propagated.

use crate::error::{MorentError, Result};
use crate::model::Car;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

pub trait CatalogSource {
    /// Fetch every catalog document. Fired once per session or navigation;
    /// no retry, no cancellation.
    fn fetch(&self) -> Result<Vec<Value>>;
}

/// Reads the catalog from a JSON array document on disk, standing in for
/// the hosted content store's query endpoint.
pub struct FileSource {
    path: Option<PathBuf>,
}

impl FileSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl CatalogSource for FileSource {
    fn fetch(&self) -> Result<Vec<Value>> {
        let path = self.path.as_ref().ok_or_else(|| {
            MorentError::Fetch(
                "no catalog configured (set one with `morent config catalog <path>` \
                 or pass --catalog)"
                    .to_string(),
            )
        })?;
        let raw = fs::read_to_string(path)
            .map_err(|e| MorentError::Fetch(format!("{}: {}", path.display(), e)))?;
        let parsed: Value = serde_json::from_str(&raw)
            .map_err(|e| MorentError::Fetch(format!("{}: invalid JSON: {}", path.display(), e)))?;
        match parsed {
            Value::Array(documents) => Ok(documents),
            _ => Err(MorentError::Fetch(format!(
                "{}: catalog document must be a JSON array",
                path.display()
            ))),
        }
    }
}

/// Fixed in-memory documents, for tests and demos.
pub struct StaticSource {
    documents: Vec<Value>,
}

impl StaticSource {
    pub fn new(documents: Vec<Value>) -> Self {
        Self { documents }
    }
}

impl CatalogSource for StaticSource {
    fn fetch(&self) -> Result<Vec<Value>> {
        Ok(self.documents.clone())
    }
}

/// Result of decoding one fetched batch.
#[derive(Debug, Default)]
pub struct DecodedCatalog {
    pub cars: Vec<Car>,
    /// One reason per excluded document, for verbose diagnostics.
    pub skipped: Vec<String>,
}

/// Coerce a fetched batch into typed records. Documents are decoded
/// individually so one malformed record never poisons the batch.
pub fn decode_documents(documents: &[Value]) -> DecodedCatalog {
    let mut decoded = DecodedCatalog::default();
    for document in documents {
        match Car::from_document(document) {
            Ok(car) => decoded.cars.push(car),
            Err(e) => decoded.skipped.push(e.to_string()),
        }
    }
    decoded
}
