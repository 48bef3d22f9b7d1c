//! Event publisher backed by a broker exchange.

use std::sync::Arc;

use async_trait::async_trait;

use robosync_core::bus::{self, Broker};
use robosync_core::events::{self, EventMessage, EventPublisher};

/// Publishes robot events to a single exchange of a broker.
pub struct BusPublisher<B: ?Sized> {
    broker: Arc<B>,
    exchange: String,
}

impl<B: Broker + ?Sized> BusPublisher<B> {
    /// Declares `exchange` and returns a publisher bound to it.
    ///
    /// Declaring is idempotent, so several processes may connect to the same
    /// exchange.
    pub async fn connect(broker: Arc<B>, exchange: impl Into<String>) -> bus::Result<Self> {
        let exchange = exchange.into();
        broker.declare_exchange(&exchange).await?;
        tracing::info!(exchange = %exchange, "Event publisher ready");
        Ok(Self { broker, exchange })
    }
}

#[async_trait]
impl<B: Broker + ?Sized + 'static> EventPublisher for BusPublisher<B> {
    async fn publish(&self, message: EventMessage) -> events::Result<()> {
        self.broker.publish(&self.exchange, &message).await?;
        tracing::debug!(
            exchange = %self.exchange,
            routing_key = %message.routing_key,
            content_type = %message.content_type,
            "Event published"
        );
        Ok(())
    }
}
