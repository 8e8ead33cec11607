use super::*;
use crate::Error;
use crate::Result;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::UnboundedSender;

/// Destination for one subscription's events.
/// Implementations can be WebSocket sessions, in-process channels, test probes, etc.
///
/// A Sink is driven by exactly one delivery worker, so `send` is never called
/// concurrently and calls arrive in append order. Any error ends the subscription.
#[async_trait::async_trait]
pub trait Sink: Send {
    async fn send(&mut self, event: &GameEvent) -> Result<()>;
}

#[async_trait::async_trait]
impl Sink for UnboundedSender<GameEvent> {
    async fn send(&mut self, event: &GameEvent) -> Result<()> {
        UnboundedSender::send(self, event.clone()).map_err(|_| Error::transport("receiver dropped"))
    }
}

/// Bounded channels apply backpressure to the worker only, never to the publisher.
#[async_trait::async_trait]
impl Sink for Sender<GameEvent> {
    async fn send(&mut self, event: &GameEvent) -> Result<()> {
        Sender::send(self, event.clone())
            .await
            .map_err(|_| Error::transport("receiver dropped"))
    }
}
