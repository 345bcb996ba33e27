//! Event bus transport
//!
//! Interfaces publish `Event`s, dispatchers and monitors consume them. The
//! traits keep consumers independent of the channel implementation.

pub mod channel;

use crate::error::TransportError;
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

/// Producing side of the bus
#[async_trait]
pub trait Publisher<M>: Send + Sync
where
    M: Serialize + Send + Sync,
{
    /// Hand `msg` to every current subscriber
    async fn publish(&self, msg: &M) -> Result<(), TransportError>;
}

/// Consuming side of the bus, one per consumer
#[async_trait]
pub trait Subscriber<M>: Send
where
    M: DeserializeOwned + Send,
{
    /// Wait for the next message; `ChannelClosed` once every producer is gone
    ///
    /// `Lagged(n)` means `n` messages were overwritten before they were read;
    /// the following call resumes with the oldest message still queued.
    async fn next(&mut self) -> Result<M, TransportError>;

    /// Next message if one is already queued, with the same `Lagged` reporting
    fn try_next(&mut self) -> Result<Option<M>, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::channel::ChannelPublisher;
    use super::*;
    use hive_core::{AccountData, Event, EventKind};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_events_through_trait_objects() {
        let (publisher, subscriber) = ChannelPublisher::<Event>::pair(4);
        let publisher: Box<dyn Publisher<Event>> = Box::new(publisher);
        let mut subscriber: Box<dyn Subscriber<Event>> = Box::new(subscriber);

        assert_eq!(subscriber.try_next().unwrap(), None);
        publisher
            .publish(&Event::new(AccountData::new("paper", dec!(100))))
            .await
            .unwrap();

        let event = subscriber.next().await.unwrap();
        assert_eq!(event.kind(), EventKind::Account);
    }
}
