// Thu Aug 27 2026 - Alex

use thiserror::Error;

/// Everything that can go wrong with a single request attempt. All
/// variants drive the same retry/cooldown policy; the distinction only
/// matters for logging and tests.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("unrecognized response schema")]
    Schema,
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
}
