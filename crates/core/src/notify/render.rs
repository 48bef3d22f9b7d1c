use crate::bus::QueueBinding;
use crate::events::RoutingKey;
use crate::robot::Robot;

use super::Notification;

/// Renders a notification as the log line of the queue it arrived on.
pub fn render_notification(binding: &QueueBinding, notification: &Notification) -> String {
    let queue = &binding.queue;
    match (binding.routing_key, notification) {
        (RoutingKey::Add, Notification::Snapshot(robot)) => {
            format!("[{queue}] ADD Robot: ID={}, Name={}", robot.id, robot.name)
        }
        (RoutingKey::Get, Notification::Snapshot(robot)) => {
            let c = robot.coordinates;
            format!(
                "[{queue}] GET Robot: ID={}, Name={}. Coordinates: X={}, Y={}, Z={}",
                robot.id, robot.name, c.x, c.y, c.z
            )
        }
        (
            RoutingKey::UpdateCoordinates
            | RoutingKey::UpdateName
            | RoutingKey::UpdateType
            | RoutingKey::Delete,
            Notification::Snapshot(robot),
        ) => format!("[{queue}] {}", robot_info(robot)),
        (_, Notification::Text(text)) => format!("[{queue}] {text}"),
    }
}

fn robot_info(robot: &Robot) -> String {
    let c = robot.coordinates;
    format!(
        "RobotInfo: ID={}, Name={}, Type={}, X={}, Y={}, Z={}",
        robot.id, robot.name, robot.kind, c.x, c.y, c.z
    )
}
