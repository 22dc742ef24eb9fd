//! Publish/subscribe message channel to the card readers.
//!
//! The readers are reached over MQTT: a command is published on one topic and the answer
//! arrives on another. `MessageChannel` hides the broker behind a small request/reply
//! surface so the card-read flow can be tested against an in-memory channel.
//!
//! Only one caller may wait on a topic at a time. Registering the waiter before publishing
//! the command (`subscribe_once` then `wait`) makes sure a fast reader cannot answer before
//! anyone is listening.

pub mod mqtt;
pub mod waiters;

#[cfg(test)]
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::server::error::channel::ChannelError;

/// Registered interest in the next message on one topic.
///
/// Obtained from `MessageChannel::subscribe_once` and consumed by `MessageChannel::wait`.
#[derive(Debug)]
pub struct Subscription {
    pub topic: String,
    pub(crate) waiter_id: u64,
    pub(crate) receiver: oneshot::Receiver<String>,
}

#[async_trait]
pub trait MessageChannel: Send + Sync {
    /// Publishes a text payload with at-least-once delivery, not retained.
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), ChannelError>;

    /// Registers a waiter for the next message on `topic` and subscribes to it.
    ///
    /// # Returns
    /// - `Ok(Subscription)` - Waiter registered; pass to `wait`
    /// - `Err(ChannelError::TopicBusy)` - Another live waiter holds the topic
    /// - `Err(ChannelError::Client)` - Subscribe request could not be sent
    async fn subscribe_once(&self, topic: &str) -> Result<Subscription, ChannelError>;

    /// Drops the waiter if it is still registered and unsubscribes from the topic.
    async fn release(&self, topic: &str, waiter_id: u64);

    /// Waits for the message a subscription was registered for.
    ///
    /// The topic is released whatever the outcome.
    ///
    /// # Returns
    /// - `Ok(String)` - Payload of the first message on the topic
    /// - `Err(ChannelError::Timeout)` - Nothing arrived within `timeout`
    /// - `Err(ChannelError::Closed)` - The waiter was dropped by the channel
    async fn wait(
        &self,
        subscription: Subscription,
        timeout: Duration,
    ) -> Result<String, ChannelError> {
        let Subscription {
            topic,
            waiter_id,
            receiver,
        } = subscription;

        let result = match tokio::time::timeout(timeout, receiver).await {
            Ok(Ok(payload)) => Ok(payload),
            Ok(Err(_)) => Err(ChannelError::Closed(topic.clone())),
            Err(_) => Err(ChannelError::Timeout {
                topic: topic.clone(),
                timeout,
            }),
        };

        self.release(&topic, waiter_id).await;

        result
    }

    /// Subscribes to `topic` and waits for exactly one message.
    async fn await_message(&self, topic: &str, timeout: Duration) -> Result<String, ChannelError> {
        let subscription = self.subscribe_once(topic).await?;
        self.wait(subscription, timeout).await
    }
}
