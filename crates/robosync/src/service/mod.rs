//! Robot service: orchestrates storage, cache and event publishing.

mod robot;

pub use robot::RobotService;
