use crate::robot::RobotId;

/// Namespace shared by every robot cache entry.
pub const ROBOT_KEY_PREFIX: &str = "robots:";

/// Returns the cache key for a single robot.
///
/// # Examples
///
/// ```
/// use robosync_core::cache::robot_key;
///
/// assert_eq!(robot_key(7), "robots:7");
/// ```
pub fn robot_key(id: RobotId) -> String {
    format!("{ROBOT_KEY_PREFIX}{id}")
}
