//! Redis broker backend.
//!
//! Lets the server and the notifier run as separate processes. Exchanges and
//! bindings are Redis sets, queues are Redis lists.

mod broker;
mod error;

pub use broker::RedisBroker;
