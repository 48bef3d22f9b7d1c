//! Delivery substrate contract: exchanges, bound queues and deliveries.
//!
//! Backends live in `robosync_bus`; this module only holds the trait, the
//! queue topology and the pure wire helpers shared by every backend.

mod error;
mod keys;
mod topology;
mod traits;
mod types;

pub use error::{BusError, Result};
pub use keys::{binding_key, queue_key, EXCHANGES_KEY};
pub use topology::{QueueBinding, Topology, DEFAULT_EXCHANGE};
pub use traits::{declare_topology, Broker};
pub use types::{decode_envelope, encode_envelope, Delivery};
