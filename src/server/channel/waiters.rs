//! Per-topic registry of callers waiting for a single message.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard,
    },
};

use tokio::sync::oneshot;

use crate::server::error::channel::ChannelError;

struct Waiter {
    id: u64,
    sender: oneshot::Sender<String>,
}

/// Maps topics to the one caller currently waiting on them.
///
/// Cheap to clone; clones share the same registry. Shared between the request handlers
/// that register waiters and the event loop that delivers messages.
#[derive(Clone, Default)]
pub struct WaiterRegistry {
    waiters: Arc<Mutex<HashMap<String, Waiter>>>,
    next_id: Arc<AtomicU64>,
}

impl WaiterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Waiter>> {
        // No code path panics while holding the lock; a poisoned map is still consistent.
        self.waiters.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Registers a waiter for the next message on `topic`.
    ///
    /// A waiter whose receiver was dropped (its request went away) is replaced.
    ///
    /// # Returns
    /// - `Ok((waiter_id, receiver))` - Registered waiter
    /// - `Err(ChannelError::TopicBusy)` - A live waiter already holds the topic
    pub fn register(
        &self,
        topic: &str,
    ) -> Result<(u64, oneshot::Receiver<String>), ChannelError> {
        let mut waiters = self.lock();

        if let Some(existing) = waiters.get(topic) {
            if !existing.sender.is_closed() {
                return Err(ChannelError::TopicBusy(topic.to_string()));
            }
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = oneshot::channel();
        waiters.insert(topic.to_string(), Waiter { id, sender });

        Ok((id, receiver))
    }

    /// Hands `payload` to the waiter on `topic`, removing it.
    ///
    /// # Returns
    /// - `true` - A live waiter received the payload
    /// - `false` - Nobody was waiting, or the waiter had gone away
    pub fn deliver(&self, topic: &str, payload: String) -> bool {
        let waiter = self.lock().remove(topic);

        match waiter {
            Some(waiter) => waiter.sender.send(payload).is_ok(),
            None => false,
        }
    }

    /// Removes the waiter on `topic` if it is still the one identified by `waiter_id`.
    ///
    /// # Returns
    /// - `true` - No waiter remains on the topic
    /// - `false` - A different waiter now holds the topic
    pub fn remove(&self, topic: &str, waiter_id: u64) -> bool {
        let mut waiters = self.lock();

        match waiters.get(topic) {
            Some(waiter) if waiter.id == waiter_id => {
                waiters.remove(topic);
                true
            }
            Some(_) => false,
            None => true,
        }
    }

    /// Topics that currently have a waiter, used to re-subscribe after a reconnect.
    pub fn topics(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }
}
