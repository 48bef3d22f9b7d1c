//! Request bodies accepted by the robot API.

use serde::Deserialize;

use super::{
    validate_name, validate_new_robot, validate_type, Coordinates, NewRobot, RobotError, RobotId,
};

/// Body of `POST /robots/create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRobotRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
}

impl CreateRobotRequest {
    /// Validates the request and converts it into the fields of a new robot.
    pub fn into_new_robot(self) -> Result<NewRobot, RobotError> {
        let robot = NewRobot::new(self.name, self.kind, self.coordinates);
        validate_new_robot(&robot)?;
        Ok(robot)
    }
}

/// Body of `PUT /robots/updatecord`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCoordinatesRequest {
    pub id: RobotId,
    #[serde(flatten)]
    pub coordinates: Coordinates,
}

/// Body of `PUT /robots/updatename`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNameRequest {
    pub id: RobotId,
    pub name: String,
}

impl UpdateNameRequest {
    pub fn validate(&self) -> Result<(), RobotError> {
        validate_name(&self.name)
    }
}

/// Body of `PUT /robots/updatetype`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTypeRequest {
    pub id: RobotId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl UpdateTypeRequest {
    pub fn validate(&self) -> Result<(), RobotError> {
        validate_type(&self.kind)
    }
}
