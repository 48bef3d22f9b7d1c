use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::events::EventMessage;

use super::{Delivery, QueueBinding, Result, Topology};

/// A topic-style message broker.
///
/// Declarations are idempotent. A message is copied into every queue bound
/// to its routing key; messages no queue is bound to are dropped.
#[async_trait]
pub trait Broker: Send + Sync {
    /// Declares an exchange.
    async fn declare_exchange(&self, exchange: &str) -> Result<()>;

    /// Declares a queue and binds it to `exchange`.
    async fn declare_queue(&self, exchange: &str, binding: &QueueBinding) -> Result<()>;

    /// Publishes a message to `exchange`, routed by its routing key.
    async fn publish(&self, exchange: &str, message: &EventMessage) -> Result<()>;

    /// Starts consuming a queue. The channel closes when the broker stops
    /// delivering.
    async fn consume(&self, queue: &str) -> Result<mpsc::Receiver<Delivery>>;

    /// Hands back a receiver obtained from [`consume`](Broker::consume) that
    /// was never used, so the queue can be consumed again.
    ///
    /// Brokers whose queues outlive their consumers need nothing more than
    /// dropping the receiver.
    async fn release(&self, queue: &str, deliveries: mpsc::Receiver<Delivery>) -> Result<()> {
        let _ = queue;
        drop(deliveries);
        Ok(())
    }
}

/// Declares the exchange and every queue of `topology`.
pub async fn declare_topology<B: Broker + ?Sized>(broker: &B, topology: &Topology) -> Result<()> {
    broker.declare_exchange(&topology.exchange).await?;
    for binding in &topology.bindings {
        broker.declare_queue(&topology.exchange, binding).await?;
    }
    Ok(())
}
