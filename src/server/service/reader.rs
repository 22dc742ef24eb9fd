//! Card reader access over the message channel.
//!
//! A card read is a request/reply exchange: publish a `read` command, then wait for the
//! reader to answer with the code of the card presented. Only one exchange may be in flight
//! per reader, otherwise two tills waiting on the same reply topic could receive each
//! other's card. `CardReader` serializes the exchanges with an async mutex; callers queue
//! for at most the configured queue timeout.

use std::sync::Arc;

use dioxus_logger::tracing;
use rand::Rng;
use tokio::sync::Mutex;

use crate::server::{
    channel::MessageChannel, error::reader::ReaderError, model::reader::ReaderSettings,
};

const READ_COMMAND: &str = "read";
const CORRELATION_ID_LENGTH: usize = 16;

/// Handle to one card reader. Cheap to clone; clones share the reader lock.
#[derive(Clone)]
pub struct CardReader {
    channel: Arc<dyn MessageChannel>,
    settings: ReaderSettings,
    lock: Arc<Mutex<()>>,
}

impl CardReader {
    pub fn new(channel: Arc<dyn MessageChannel>, settings: ReaderSettings) -> Self {
        Self {
            channel,
            settings,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Asks the reader for a card and waits for its code.
    ///
    /// The reply subscription is registered before the command is published so that an
    /// immediate answer is not missed.
    ///
    /// # Returns
    /// - `Ok(String)` - Trimmed card code
    /// - `Err(ReaderError::Busy)` - Another read held the reader past the queue timeout
    /// - `Err(ReaderError::Timeout)` - No card was presented within the read timeout
    /// - `Err(ReaderError::Channel)` - The command could not be sent or the reply subscribed
    pub async fn read_code(&self) -> Result<String, ReaderError> {
        let queue_timeout = self.settings.queue_timeout;
        let _guard = tokio::time::timeout(queue_timeout, self.lock.lock())
            .await
            .map_err(|_| ReaderError::Busy {
                waited: queue_timeout,
            })?;

        let (command, reply_topic) = self.exchange();

        let subscription = self.channel.subscribe_once(&reply_topic).await?;
        let waiter_id = subscription.waiter_id;

        if let Err(e) = self
            .channel
            .publish(&self.settings.command_topic, &command)
            .await
        {
            self.channel.release(&reply_topic, waiter_id).await;
            return Err(e.into());
        }

        tracing::debug!(
            "Sent '{}' on {}, awaiting card on {}",
            command,
            self.settings.command_topic,
            reply_topic
        );

        let payload = self
            .channel
            .wait(subscription, self.settings.read_timeout)
            .await?;

        Ok(payload.trim().to_string())
    }

    /// Command payload and reply topic for the next exchange.
    fn exchange(&self) -> (String, String) {
        if self.settings.correlate {
            let id = correlation_id();
            (
                format!("{}:{}", READ_COMMAND, id),
                format!("{}/{}", self.settings.reply_topic, id),
            )
        } else {
            (READ_COMMAND.to_string(), self.settings.reply_topic.clone())
        }
    }
}

/// Random id safe to use as an MQTT topic level.
fn correlation_id() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::rng();

    (0..CORRELATION_ID_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
