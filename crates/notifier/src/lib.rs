//! Notification Fan-Out.
//!
//! One independent worker per queue of the [`Topology`](robosync_core::bus::Topology).
//! Each worker decodes deliveries by their declared content type, renders them
//! for the queue they arrived on and hands the line to a [`NotificationSink`].
//! Workers share nothing but the sink, so a slow or failing queue never holds
//! up the others.
//!
//! The pure decode/render steps live in `robosync_core::notify`; this crate
//! owns the tasks and the sinks.

mod fanout;
mod sink;
mod worker;

pub use fanout::FanOut;
pub use sink::{MemorySink, NotificationSink, TracingSink};
pub use worker::{run_worker, WorkerStats};
