use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A charge intent row carries a status string this build does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown charge intent status '{value}'")]
    UnknownChargeStatus {
        /// The stored status value
        value: String,
    },

    /// The line items stored on a charge intent could not be decoded.
    #[error("Failed to decode line items of charge intent {intent_id}: {source}")]
    InvalidLineItems {
        /// Id of the charge intent
        intent_id: i32,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },
}
