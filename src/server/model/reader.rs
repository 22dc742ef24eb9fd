//! Card reader settings.

use std::time::Duration;

/// Topics and timeouts of one card reader.
#[derive(Debug, Clone)]
pub struct ReaderSettings {
    /// Topic the `read` command is published on.
    pub command_topic: String,
    /// Topic the reader answers on with the card code.
    pub reply_topic: String,
    /// How long to wait for a card after the command was published.
    pub read_timeout: Duration,
    /// How long a caller may queue behind another card read before giving up.
    pub queue_timeout: Duration,
    /// Use a per-read reply topic `<reply_topic>/<id>` and command `read:<id>`.
    pub correlate: bool,
}
