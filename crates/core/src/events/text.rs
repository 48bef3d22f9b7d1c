//! Human-readable descriptions carried by text events.

use crate::robot::{Coordinates, RobotId};

pub fn coordinates_changed_text(id: RobotId, coordinates: Coordinates) -> String {
    format!(
        "Coordinates of robot with ID: {id} were changed to X:{}, Y:{}, Z:{}",
        coordinates.x, coordinates.y, coordinates.z
    )
}

pub fn name_changed_text(id: RobotId, name: &str) -> String {
    format!("Name of robot with ID: {id} was changed to {name}")
}

pub fn type_changed_text(id: RobotId, kind: &str) -> String {
    format!("Type of robot with ID: {id} was changed to {kind}")
}

pub fn robot_deleted_text(id: RobotId) -> String {
    format!("Robot with ID: {id} was destroyed")
}
