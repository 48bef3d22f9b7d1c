//! Event Bus - Imperative Shell.
//!
//! Concrete implementations of [`robosync_core::bus::Broker`] plus the
//! [`BusPublisher`] that turns any broker into an
//! [`EventPublisher`](robosync_core::events::EventPublisher).
//!
//! # Backends
//!
//! - [`MemoryBroker`]: bounded tokio channels, lives as long as the process
//! - `RedisBroker` (feature `redis`): Redis sets for bindings and lists for queues,
//!   shared between processes
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use robosync_bus::{BusPublisher, MemoryBroker};
//! use robosync_core::bus::{declare_topology, Topology};
//!
//! let broker = Arc::new(MemoryBroker::new(1024));
//! let topology = Topology::default();
//! declare_topology(broker.as_ref(), &topology).await?;
//!
//! let publisher = BusPublisher::connect(broker, &topology.exchange).await?;
//! publisher.publish_text("hello", RoutingKey::Delete).await?;
//! ```

mod memory;
mod publisher;

#[cfg(feature = "redis")]
mod redis_impl;

pub use memory::MemoryBroker;
pub use publisher::BusPublisher;

#[cfg(feature = "redis")]
pub use redis_impl::RedisBroker;
