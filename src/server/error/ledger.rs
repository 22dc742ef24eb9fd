use thiserror::Error;

/// Failures talking to the SavaPage credit ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The request never produced a response (connect, TLS, timeout, body decode).
    #[error("Failed to reach SavaPage: {0}")]
    Transport(#[from] reqwest::Error),

    /// SavaPage answered with a non-200 status.
    #[error("SavaPage responded with status {0}")]
    Status(reqwest::StatusCode),

    /// SavaPage answered 200 but flagged the call as unsuccessful.
    #[error("SavaPage returned an unsuccessful response: {0}")]
    Rejected(String),

    /// The request URL could not be built.
    #[error("Failed to build SavaPage URL: {0}")]
    Url(#[from] url::ParseError),
}
