//! Pure validation functions for robot fields.

use super::{NewRobot, RobotError};

/// Validates a robot name. Whitespace-only names are rejected.
pub fn validate_name(name: &str) -> Result<(), RobotError> {
    if name.trim().is_empty() {
        return Err(RobotError::EmptyName);
    }
    Ok(())
}

/// Validates a robot type tag. Whitespace-only tags are rejected.
pub fn validate_type(kind: &str) -> Result<(), RobotError> {
    if kind.trim().is_empty() {
        return Err(RobotError::EmptyType);
    }
    Ok(())
}

/// Validates every field of a robot that is about to be created.
pub fn validate_new_robot(robot: &NewRobot) -> Result<(), RobotError> {
    validate_name(&robot.name)?;
    validate_type(&robot.kind)
}
