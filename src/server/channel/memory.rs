//! In-process message channel for tests.
//!
//! Plays the part of the broker and the card reader: every publish is recorded and passed
//! to a responder which may answer with a message on another topic.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::server::{
    channel::{waiters::WaiterRegistry, MessageChannel, Subscription},
    error::channel::ChannelError,
};

type Responder = dyn Fn(&str, &str) -> Option<(String, String)> + Send + Sync;

pub struct LoopbackChannel {
    waiters: WaiterRegistry,
    responder: Box<Responder>,
    published: Arc<Mutex<Vec<(String, String)>>>,
}

impl LoopbackChannel {
    /// Channel where `responder(topic, payload)` decides the reply to each publish.
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str, &str) -> Option<(String, String)> + Send + Sync + 'static,
    {
        Self {
            waiters: WaiterRegistry::new(),
            responder: Box::new(responder),
            published: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Channel whose reader never answers.
    pub fn silent() -> Self {
        Self::new(|_, _| None)
    }

    /// Channel whose reader answers every command on `reply_topic` with `code`.
    pub fn answering(reply_topic: &str, code: &str) -> Self {
        let reply_topic = reply_topic.to_string();
        let code = code.to_string();
        Self::new(move |_, _| Some((reply_topic.clone(), code.clone())))
    }

    /// Every `(topic, payload)` published so far.
    pub fn published(&self) -> Vec<(String, String)> {
        self.published.lock().unwrap().clone()
    }

    /// Delivers a message as if it came from the broker.
    pub fn inject(&self, topic: &str, payload: &str) -> bool {
        self.waiters.deliver(topic, payload.to_string())
    }
}

#[async_trait]
impl MessageChannel for LoopbackChannel {
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), ChannelError> {
        self.published
            .lock()
            .unwrap()
            .push((topic.to_string(), payload.to_string()));

        if let Some((reply_topic, reply)) = (self.responder)(topic, payload) {
            self.waiters.deliver(&reply_topic, reply);
        }

        Ok(())
    }

    async fn subscribe_once(&self, topic: &str) -> Result<Subscription, ChannelError> {
        let (waiter_id, receiver) = self.waiters.register(topic)?;

        Ok(Subscription {
            topic: topic.to_string(),
            waiter_id,
            receiver,
        })
    }

    async fn release(&self, topic: &str, waiter_id: u64) {
        self.waiters.remove(topic, waiter_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn await_message_returns_injected_payload() {
        let channel = Arc::new(LoopbackChannel::silent());

        let waiter = {
            let channel = channel.clone();
            tokio::spawn(async move {
                channel
                    .await_message("bar1/client", Duration::from_secs(1))
                    .await
            })
        };

        // Give the waiter a chance to register before injecting.
        let mut delivered = false;
        for _ in 0..50 {
            if channel.inject("bar1/client", "ABC123") {
                delivered = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert!(delivered);
        assert_eq!(waiter.await.unwrap().unwrap(), "ABC123");
    }

    #[tokio::test(start_paused = true)]
    async fn await_message_times_out_and_frees_topic() {
        let channel = LoopbackChannel::silent();

        let result = channel
            .await_message("bar1/client", Duration::from_secs(60))
            .await;

        assert!(matches!(result, Err(ChannelError::Timeout { .. })));
        assert!(channel.subscribe_once("bar1/client").await.is_ok());
    }
}
