//! Redis error mapping to BusError.

use robosync_core::bus::BusError;

/// Maps Redis errors to BusError.
pub fn map_redis_error(err: redis::RedisError) -> BusError {
    if err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped() {
        BusError::ConnectionFailed(err.to_string())
    } else {
        BusError::OperationFailed(err.to_string())
    }
}
