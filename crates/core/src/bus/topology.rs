use crate::events::RoutingKey;

/// Exchange every robot event is published to unless configured otherwise.
pub const DEFAULT_EXCHANGE: &str = "robots";

/// A queue and the single routing key it is bound with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueBinding {
    pub queue: String,
    pub routing_key: RoutingKey,
}

impl QueueBinding {
    pub fn new(queue: impl Into<String>, routing_key: RoutingKey) -> Self {
        Self {
            queue: queue.into(),
            routing_key,
        }
    }
}

/// The exchange and its queue bindings.
///
/// Built once at startup and handed to both the publishing side and the
/// fan-out so they agree on the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    pub exchange: String,
    pub bindings: Vec<QueueBinding>,
}

impl Topology {
    /// One queue per routing key on `exchange`.
    pub fn robots(exchange: impl Into<String>) -> Self {
        let bindings = RoutingKey::ALL
            .into_iter()
            .map(|key| QueueBinding::new(queue_name(key), key))
            .collect();

        Self {
            exchange: exchange.into(),
            bindings,
        }
    }

    /// Queues bound to `routing_key`.
    pub fn queues_for(&self, routing_key: RoutingKey) -> impl Iterator<Item = &str> {
        self.bindings
            .iter()
            .filter(move |binding| binding.routing_key == routing_key)
            .map(|binding| binding.queue.as_str())
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::robots(DEFAULT_EXCHANGE)
    }
}

fn queue_name(key: RoutingKey) -> &'static str {
    match key {
        RoutingKey::Add => "robot_add_queue",
        RoutingKey::Get => "robot_get_queue",
        RoutingKey::UpdateCoordinates => "robot_updatecord_queue",
        RoutingKey::UpdateName => "robot_updatename_queue",
        RoutingKey::UpdateType => "robot_updatetype_queue",
        RoutingKey::Delete => "robot_delete_queue",
    }
}
