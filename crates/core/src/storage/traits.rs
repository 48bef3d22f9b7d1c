use async_trait::async_trait;

use crate::robot::{Coordinates, NewRobot, Robot, RobotId};

use super::Result;

/// Durable store for robots.
///
/// Identifiers are assigned by the store on creation and never reused.
/// Updates and deletes of an unknown identifier fail with
/// [`RepositoryError::NotFound`](super::RepositoryError::NotFound).
#[async_trait]
pub trait RobotRepository: Send + Sync {
    /// Inserts a new robot and returns it with its assigned identifier.
    async fn create_robot(&self, robot: &NewRobot) -> Result<Robot>;

    /// Gets a robot by its ID.
    async fn get_robot(&self, id: RobotId) -> Result<Option<Robot>>;

    /// Replaces the coordinates of a robot.
    async fn update_coordinates(&self, id: RobotId, coordinates: Coordinates) -> Result<()>;

    /// Renames a robot.
    async fn update_name(&self, id: RobotId, name: &str) -> Result<()>;

    /// Changes the type tag of a robot.
    async fn update_type(&self, id: RobotId, kind: &str) -> Result<()>;

    /// Deletes a robot by its ID.
    async fn delete_robot(&self, id: RobotId) -> Result<()>;
}
