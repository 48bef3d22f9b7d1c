//! In-memory broker backend.
//!
//! Queues survive for the lifetime of the process. Consumers and publishers
//! must share the same [`MemoryBroker`] value (it is cheap to clone).

mod broker;

pub use broker::MemoryBroker;
