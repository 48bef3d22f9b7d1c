//! In-memory storage backend.
//!
//! Robots live in a `HashMap` behind `Arc<RwLock<_>>` and are lost when the
//! process exits. Useful for development and tests.

mod repository;

pub use repository::InMemoryRepository;
