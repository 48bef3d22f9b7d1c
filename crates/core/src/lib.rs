//! Functional core for robosync - no I/O, no side effects.
//!
//! This crate provides:
//! - Robot domain types, API request types and validation
//! - Repository, cache, event publisher and broker traits
//! - Cache key layout and snapshot serialization
//! - Routing keys, content types and the queue topology of the event bus
//! - Pure decode and render functions for the notification fan-out
//!
//! Concrete backends live in `robosync_bus` (delivery substrate) and in the
//! `robosync` server crate (storage and cache).

pub mod bus;
pub mod cache;
pub mod events;
pub mod notify;
pub mod robot;
pub mod storage;
