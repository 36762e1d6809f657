//! Channel-backed bus for tests and single-process deployments.
//!
//! Each subscriber owns the receiving half of an mpsc channel; publishing
//! clones the message into every live channel. Delivery is fire-and-forget:
//! there is no backpressure and no replay, which is all the persist-then-
//! publish contract needs (the store owns the events, the bus only fans
//! them out).

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use crate::bus::{EventBus, Subscription};

/// A publisher panicked while holding the subscriber list.
#[derive(Debug, Error)]
#[error("event bus subscriber list poisoned")]
pub struct BusPoisoned;

pub struct InMemoryEventBus<M> {
    senders: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self {
            senders: Mutex::new(Vec::new()),
        }
    }

    /// Live subscriptions, after pruning by the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.senders.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = BusPoisoned;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut senders = self.senders.lock().map_err(|_| BusPoisoned)?;

        // A send fails only when the subscription was dropped; evict those
        // channels as we go so they stop costing clones.
        let mut i = 0;
        while i < senders.len() {
            if senders[i].send(message.clone()).is_ok() {
                i += 1;
            } else {
                senders.swap_remove(i);
            }
        }

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // Poisoning only means a publisher panicked mid-send; the list
        // itself is still a valid Vec, so recover it and register anyway.
        match self.senders.lock() {
            Ok(mut senders) => senders.push(tx),
            Err(poisoned) => poisoned.into_inner().push(tx),
        }

        Subscription::new(rx)
    }
}
