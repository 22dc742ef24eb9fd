use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    /// Stable machine-readable error code, e.g. `READER_TIMEOUT`.
    pub code: String,
    /// Human-readable summary.
    pub message: String,
    /// Underlying error detail.
    pub error: String,
}
