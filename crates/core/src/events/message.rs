use crate::robot::Robot;

use super::{ContentType, Result, RoutingKey};

/// An event ready to be handed to the delivery substrate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMessage {
    pub routing_key: RoutingKey,
    pub content_type: ContentType,
    pub body: Vec<u8>,
}

impl EventMessage {
    /// Event carrying the JSON snapshot of a robot.
    pub fn snapshot(robot: &Robot, routing_key: RoutingKey) -> Result<Self> {
        let body = serde_json::to_vec(robot)?;
        Ok(Self {
            routing_key,
            content_type: ContentType::Json,
            body,
        })
    }

    /// Event carrying a text description.
    pub fn text(message: impl Into<String>, routing_key: RoutingKey) -> Self {
        Self {
            routing_key,
            content_type: ContentType::PlainText,
            body: message.into().into_bytes(),
        }
    }
}
