//! Errors raised while loading a relation or building its report.

use relkit::RelationError;
use thiserror::Error;

/// Failure to load, analyse or serialize a relation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The relation or its scope is malformed.
    #[error(transparent)]
    Relation(#[from] RelationError),

    /// The input document or the report could not be (de)serialized.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
