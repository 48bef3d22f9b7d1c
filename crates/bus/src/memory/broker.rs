//! Topic-routed broker on top of bounded tokio channels.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, RwLock};

use robosync_core::bus::{Broker, BusError, Delivery, QueueBinding, Result};
use robosync_core::events::{EventMessage, RoutingKey};

/// A declared queue.
///
/// The receiving half is parked here until a consumer claims it.
#[derive(Debug)]
struct Queue {
    sender: mpsc::Sender<Delivery>,
    receiver: Option<mpsc::Receiver<Delivery>>,
}

#[derive(Debug, Default)]
struct State {
    /// exchange -> routing key -> bound queue names
    exchanges: HashMap<String, HashMap<RoutingKey, Vec<String>>>,
    queues: HashMap<String, Queue>,
}

/// In-memory broker.
///
/// Each queue is a bounded channel of `capacity` messages. Publishing into a
/// full queue fails instead of waiting, and a queue may be consumed once.
#[derive(Debug, Clone)]
pub struct MemoryBroker {
    state: Arc<RwLock<State>>,
    capacity: usize,
}

impl MemoryBroker {
    /// Creates an empty broker whose queues hold up to `capacity` messages.
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
            capacity: capacity.max(1),
        }
    }

    /// Number of messages waiting in `queue`, if it exists.
    pub async fn pending(&self, queue: &str) -> Option<usize> {
        let state = self.state.read().await;
        state
            .queues
            .get(queue)
            .map(|q| q.sender.max_capacity() - q.sender.capacity())
    }
}

#[async_trait]
impl Broker for MemoryBroker {
    async fn declare_exchange(&self, exchange: &str) -> Result<()> {
        let mut state = self.state.write().await;
        state.exchanges.entry(exchange.to_string()).or_default();
        Ok(())
    }

    async fn declare_queue(&self, exchange: &str, binding: &QueueBinding) -> Result<()> {
        let mut state = self.state.write().await;
        let capacity = self.capacity;

        let routes = state
            .exchanges
            .get_mut(exchange)
            .ok_or_else(|| BusError::ExchangeNotFound(exchange.to_string()))?;
        let bound = routes.entry(binding.routing_key).or_default();
        if !bound.contains(&binding.queue) {
            bound.push(binding.queue.clone());
        }

        state.queues.entry(binding.queue.clone()).or_insert_with(|| {
            let (sender, receiver) = mpsc::channel(capacity);
            Queue {
                sender,
                receiver: Some(receiver),
            }
        });

        tracing::debug!(
            exchange,
            queue = %binding.queue,
            routing_key = %binding.routing_key,
            "Queue declared"
        );
        Ok(())
    }

    async fn publish(&self, exchange: &str, message: &EventMessage) -> Result<()> {
        let state = self.state.read().await;

        let routes = state
            .exchanges
            .get(exchange)
            .ok_or_else(|| BusError::ExchangeNotFound(exchange.to_string()))?;

        let Some(bound) = routes.get(&message.routing_key) else {
            tracing::debug!(
                exchange,
                routing_key = %message.routing_key,
                "No queue bound, message dropped"
            );
            return Ok(());
        };

        let delivery = Delivery::from(message);
        let mut first_error = None;
        for name in bound {
            let Some(queue) = state.queues.get(name) else {
                continue;
            };
            let sent = queue.sender.try_send(delivery.clone());
            let error = match sent {
                Ok(()) => continue,
                Err(mpsc::error::TrySendError::Full(_)) => BusError::QueueFull(name.clone()),
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    BusError::OperationFailed(format!("Queue {name} is closed"))
                }
            };
            tracing::warn!(queue = %name, error = %error, "Delivery failed");
            first_error.get_or_insert(error);
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn consume(&self, queue: &str) -> Result<mpsc::Receiver<Delivery>> {
        let mut state = self.state.write().await;

        let entry = state
            .queues
            .get_mut(queue)
            .ok_or_else(|| BusError::QueueNotFound(queue.to_string()))?;

        entry
            .receiver
            .take()
            .ok_or_else(|| BusError::AlreadyConsumed(queue.to_string()))
    }

    async fn release(&self, queue: &str, deliveries: mpsc::Receiver<Delivery>) -> Result<()> {
        let mut state = self.state.write().await;

        let entry = state
            .queues
            .get_mut(queue)
            .ok_or_else(|| BusError::QueueNotFound(queue.to_string()))?;

        if entry.receiver.is_some() {
            return Err(BusError::OperationFailed(format!(
                "Queue {queue} is not being consumed"
            )));
        }
        entry.receiver = Some(deliveries);

        tracing::debug!(queue, "Consumer released");
        Ok(())
    }
}
