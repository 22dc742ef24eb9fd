use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{channel::ChannelError, error_response};

/// Failures of the card-read pipeline before the ledger is involved.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// Another card read held the reader for longer than the queue timeout.
    #[error("Card reader is busy, gave up after waiting {waited:?}")]
    Busy {
        /// How long the caller waited for the reader
        waited: Duration,
    },

    /// The reader did not answer in time; no card was presented.
    #[error("Timed out after {timeout:?} waiting for a card read on '{topic}'")]
    Timeout {
        /// Reply topic that was awaited
        topic: String,
        /// The timeout that elapsed
        timeout: Duration,
    },

    /// A card was read but its code is not registered to any resident.
    #[error("No resident is registered for card code '{0}'")]
    UnknownCode(String),

    /// Publishing the read command or subscribing to the reply failed.
    #[error(transparent)]
    Channel(ChannelError),
}

impl From<ChannelError> for ReaderError {
    fn from(err: ChannelError) -> Self {
        match err {
            ChannelError::Timeout { topic, timeout } => Self::Timeout { topic, timeout },
            err => Self::Channel(err),
        }
    }
}

/// Converts card reader errors into HTTP responses.
///
/// The hardware side and the broker sit outside this service, so every variant is a
/// gateway-class failure:
/// - `Busy` → 503 Service Unavailable
/// - `Timeout` → 504 Gateway Timeout
/// - `UnknownCode` → 502 Bad Gateway
/// - `Channel` → 502 Bad Gateway
impl IntoResponse for ReaderError {
    fn into_response(self) -> Response {
        tracing::debug!("Card read failed: {}", self);

        match self {
            Self::Busy { .. } => error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "READER_BUSY",
                "Card reader is busy, please try again",
                self.to_string(),
            ),
            Self::Timeout { .. } => error_response(
                StatusCode::GATEWAY_TIMEOUT,
                "READER_TIMEOUT",
                "Timeout waiting for reader",
                self.to_string(),
            ),
            Self::UnknownCode(_) => error_response(
                StatusCode::BAD_GATEWAY,
                "UNKNOWN_CODE",
                "Code does not exist",
                self.to_string(),
            ),
            Self::Channel(_) => error_response(
                StatusCode::BAD_GATEWAY,
                "READER_UNAVAILABLE",
                "Failed to reach the card reader",
                self.to_string(),
            ),
        }
    }
}
