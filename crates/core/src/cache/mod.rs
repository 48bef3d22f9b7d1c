mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{robot_key, ROBOT_KEY_PREFIX};
pub use serialization::{deserialize_robot, serialize_robot, SerializationError};
pub use traits::Cache;
