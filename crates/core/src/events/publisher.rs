use async_trait::async_trait;

use crate::robot::Robot;

use super::{EventMessage, Result, RoutingKey};

/// Emits robot events onto the exchange.
///
/// Publishing is fire-and-forget: success means the substrate accepted the
/// message, nothing more.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publishes an already-built event.
    async fn publish(&self, message: EventMessage) -> Result<()>;

    /// Publishes the JSON snapshot of a robot.
    async fn publish_snapshot(&self, robot: &Robot, routing_key: RoutingKey) -> Result<()> {
        self.publish(EventMessage::snapshot(robot, routing_key)?).await
    }

    /// Publishes a text description.
    async fn publish_text(&self, message: &str, routing_key: RoutingKey) -> Result<()> {
        self.publish(EventMessage::text(message, routing_key)).await
    }
}
