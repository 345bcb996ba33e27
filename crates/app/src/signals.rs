//! Monitoring signals
//!
//! Observers of facade calls. Listeners register up front with
//! `subscribe()`; emitting never blocks and never fails the call that
//! triggered it, with or without listeners.

use hive_core::{CancelRequest, OrderRequest};
use hive_gateway::{ChannelPublisher, ChannelSubscriber};
use log::trace;

const DEFAULT_CAPACITY: usize = 1024;

/// Broadcast signal carrying copies of `T`
pub struct Monitor<T> {
    name: &'static str,
    publisher: ChannelPublisher<T>,
}

impl<T: Clone> Monitor<T> {
    pub fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            publisher: ChannelPublisher::new(capacity),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Register a listener
    pub fn subscribe(&self) -> ChannelSubscriber<T> {
        self.publisher.subscribe()
    }

    pub fn listener_count(&self) -> usize {
        self.publisher.subscriber_count()
    }

    /// Fire-and-forget notification
    pub fn emit(&self, value: &T) {
        if self.publisher.send(value.clone()).is_err() {
            trace!("No listeners on {} monitor", self.name);
        }
    }
}

/// Signals emitted by the trading facade
pub struct Monitors {
    /// Every order request about to be sent
    pub send: Monitor<OrderRequest>,
    /// Every cancel request about to be sent
    pub cancel: Monitor<CancelRequest>,
}

impl Default for Monitors {
    fn default() -> Self {
        Self {
            send: Monitor::new("send", DEFAULT_CAPACITY),
            cancel: Monitor::new("cancel", DEFAULT_CAPACITY),
        }
    }
}
