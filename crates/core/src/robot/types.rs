use serde::{Deserialize, Serialize};

/// Identifier assigned by the durable store when a robot is created.
pub type RobotId = i64;

/// A three-dimensional integer position, always updated as a whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "xCord")]
    pub x: i64,
    #[serde(rename = "yCord")]
    pub y: i64,
    #[serde(rename = "zCord")]
    pub z: i64,
}

impl Coordinates {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

/// A robot as persisted by the durable store.
///
/// This is also the snapshot shape written to the cache and carried by
/// structured events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pub id: RobotId,
    pub name: String,
    /// Category tag of the robot (e.g. `"scout"`).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
}

impl Robot {
    /// Builds the stored robot from the fields of a create request and the
    /// identifier the store assigned to it.
    pub fn from_new(id: RobotId, new_robot: &NewRobot) -> Self {
        Self {
            id,
            name: new_robot.name.clone(),
            kind: new_robot.kind.clone(),
            coordinates: new_robot.coordinates,
        }
    }
}

/// The fields of a robot before the store has assigned it an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRobot {
    pub name: String,
    pub kind: String,
    pub coordinates: Coordinates,
}

impl NewRobot {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            coordinates,
        }
    }
}
