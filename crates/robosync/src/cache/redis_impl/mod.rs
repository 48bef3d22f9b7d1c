//! Redis cache backend implementation.
//!
//! Shares robot snapshots between every server instance pointed at the same
//! Redis.

mod cache;
mod error;

pub use cache::RedisCache;
