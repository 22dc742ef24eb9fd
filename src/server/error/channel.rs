use std::time::Duration;

use thiserror::Error;

/// Failures of the MQTT message channel.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// No message arrived on the topic before the timeout elapsed.
    #[error("Timed out after {timeout:?} waiting for a message on '{topic}'")]
    Timeout {
        /// Topic that was awaited
        topic: String,
        /// The timeout that elapsed
        timeout: Duration,
    },

    /// Another live waiter is already registered on the topic.
    #[error("Another caller is already waiting for a message on '{0}'")]
    TopicBusy(String),

    /// The waiter was dropped before a message was delivered.
    #[error("Message channel closed before a message arrived on '{0}'")]
    Closed(String),

    /// The broker did not acknowledge the initial connection in time.
    #[error("MQTT broker did not acknowledge the connection within {0:?}")]
    ConnectTimeout(Duration),

    /// A base64 TLS blob from the configuration could not be decoded.
    #[error("Failed to decode {name}: {source}")]
    InvalidCertificate {
        /// Name of the configuration value
        name: &'static str,
        /// The underlying decode error
        #[source]
        source: base64::DecodeError,
    },

    /// The request could not be handed to the MQTT client.
    #[error(transparent)]
    Client(#[from] rumqttc::ClientError),
}
