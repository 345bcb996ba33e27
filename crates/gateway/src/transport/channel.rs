//! Tokio channel-based transport for single-process mode
//!
//! Uses broadcast channels for pub/sub semantics within a single process.
//! No serialization overhead - messages are passed directly.

use crate::error::TransportError;
use crate::transport::{Publisher, Subscriber};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::broadcast;

/// Channel-based publisher using broadcast
#[derive(Clone)]
pub struct ChannelPublisher<M> {
    tx: broadcast::Sender<M>,
}

impl<M: Clone> ChannelPublisher<M> {
    /// Create a publisher with no subscribers yet
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Create a publisher/subscriber pair with given capacity
    pub fn pair(capacity: usize) -> (Self, ChannelSubscriber<M>) {
        let (tx, rx) = broadcast::channel(capacity);
        (Self { tx }, ChannelSubscriber { rx })
    }

    /// Get another subscriber for this publisher
    pub fn subscribe(&self) -> ChannelSubscriber<M> {
        ChannelSubscriber {
            rx: self.tx.subscribe(),
        }
    }

    /// Send without awaiting, for synchronous callers
    ///
    /// Returns the number of subscribers that will see the message.
    pub fn send(&self, msg: M) -> Result<usize, TransportError> {
        self.tx.send(msg).map_err(|_| TransportError::NoSubscribers)
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[async_trait]
impl<M> Publisher<M> for ChannelPublisher<M>
where
    M: Serialize + Clone + Send + Sync + 'static,
{
    async fn publish(&self, msg: &M) -> Result<(), TransportError> {
        self.send(msg.clone())?;
        Ok(())
    }
}

/// Channel-based subscriber using broadcast receiver
///
/// Holds no sender, so `next` reports `ChannelClosed` once every publisher
/// is dropped.
pub struct ChannelSubscriber<M> {
    rx: broadcast::Receiver<M>,
}

impl<M: Clone> ChannelSubscriber<M> {
    /// Create a new subscriber from a broadcast receiver
    pub fn new(rx: broadcast::Receiver<M>) -> Self {
        Self { rx }
    }
}

#[async_trait]
impl<M> Subscriber<M> for ChannelSubscriber<M>
where
    M: DeserializeOwned + Clone + Send + 'static,
{
    async fn next(&mut self) -> Result<M, TransportError> {
        match self.rx.recv().await {
            Ok(msg) => Ok(msg),
            Err(broadcast::error::RecvError::Lagged(n)) => {
                log::warn!("Subscriber lagged, skipped {} messages", n);
                Err(TransportError::Lagged(n))
            }
            Err(broadcast::error::RecvError::Closed) => Err(TransportError::ChannelClosed),
        }
    }

    fn try_next(&mut self) -> Result<Option<M>, TransportError> {
        match self.rx.try_recv() {
            Ok(msg) => Ok(Some(msg)),
            Err(broadcast::error::TryRecvError::Empty) => Ok(None),
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                log::warn!("Subscriber lagged, skipped {} messages", n);
                Err(TransportError::Lagged(n))
            }
            Err(broadcast::error::TryRecvError::Closed) => Err(TransportError::ChannelClosed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pubsub() {
        let (publisher, mut subscriber) = ChannelPublisher::<String>::pair(10);

        publisher.publish(&"hello".to_string()).await.unwrap();

        let msg = subscriber.next().await.unwrap();
        assert_eq!(msg, "hello");
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let (publisher, mut sub1) = ChannelPublisher::<i32>::pair(10);
        let mut sub2 = publisher.subscribe();

        publisher.publish(&42).await.unwrap();

        assert_eq!(sub1.next().await.unwrap(), 42);
        assert_eq!(sub2.next().await.unwrap(), 42);
    }

    #[test]
    fn test_send_without_subscribers() {
        let publisher = ChannelPublisher::<i32>::new(4);
        assert_eq!(publisher.send(1), Err(TransportError::NoSubscribers));
    }

    #[tokio::test]
    async fn test_lag_is_reported_then_resumes() {
        let (publisher, mut subscriber) = ChannelPublisher::<i32>::pair(2);
        for i in 0..5 {
            publisher.send(i).unwrap();
        }

        assert_eq!(subscriber.next().await, Err(TransportError::Lagged(3)));
        assert_eq!(subscriber.next().await.unwrap(), 3);
        assert_eq!(subscriber.try_next().unwrap(), Some(4));
        assert_eq!(subscriber.try_next().unwrap(), None);
    }

    #[test]
    fn test_try_next_reports_lag() {
        let (publisher, mut subscriber) = ChannelPublisher::<i32>::pair(1);
        publisher.send(1).unwrap();
        publisher.send(2).unwrap();

        assert_eq!(subscriber.try_next(), Err(TransportError::Lagged(1)));
        assert_eq!(subscriber.try_next().unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_closed_after_publisher_dropped() {
        let (publisher, mut subscriber) = ChannelPublisher::<i32>::pair(4);
        publisher.send(7).unwrap();
        drop(publisher);

        assert_eq!(subscriber.next().await.unwrap(), 7);
        assert_eq!(
            subscriber.next().await.unwrap_err(),
            TransportError::ChannelClosed
        );
    }
}
