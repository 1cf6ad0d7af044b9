use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// One error descriptor from the remote service's error list.
///
/// Opaque beyond its `message`: any further fields the service attaches
/// (codes, paths, locations) ride along in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteError {
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Raised when a remote operation reports one or more errors alongside its
/// response envelope. Carries the original list verbatim.
#[derive(Debug, Clone, Error)]
#[error("remote operation returned {} error(s)", .errors.len())]
pub struct OperationError {
    pub errors: Vec<RemoteError>,
}

/// Single decision point for the error list every domain operation gets
/// back: an empty list means continue, a non-empty list means fail.
///
/// The contents of individual errors are not inspected here; callers that
/// need to classify them can downcast to [`OperationError`] and read the
/// list.
pub fn ensure_no_errors(errors: &[RemoteError]) -> Result<(), OperationError> {
    if errors.is_empty() {
        return Ok(());
    }
    Err(OperationError {
        errors: errors.to_vec(),
    })
}
