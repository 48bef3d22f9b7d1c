//! Key layout used by key-value backed brokers.

use crate::events::RoutingKey;

/// Set holding the names of every declared exchange.
pub const EXCHANGES_KEY: &str = "exchanges";

/// Set of queue names bound to `routing_key` on `exchange`.
pub fn binding_key(exchange: &str, routing_key: RoutingKey) -> String {
    format!("exchange:{exchange}:bindings:{routing_key}")
}

/// List holding the pending messages of a queue.
pub fn queue_key(queue: &str) -> String {
    format!("queue:{queue}")
}
