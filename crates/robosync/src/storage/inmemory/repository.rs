//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use robosync_core::robot::{Coordinates, NewRobot, Robot, RobotId};
use robosync_core::storage::{RepositoryError, Result, RobotRepository};

/// In-memory storage backend.
///
/// Identifiers start at 1 and are never handed out twice, even after a
/// delete.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    robots: Arc<RwLock<HashMap<RobotId, Robot>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            robots: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Applies `change` to a stored robot, or fails with `NotFound`.
    async fn modify(&self, id: RobotId, change: impl FnOnce(&mut Robot)) -> Result<()> {
        let mut robots = self.robots.write().await;
        let robot = robots
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::robot_not_found(id))?;
        change(robot);
        Ok(())
    }
}

#[async_trait]
impl RobotRepository for InMemoryRepository {
    async fn create_robot(&self, robot: &NewRobot) -> Result<Robot> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Robot::from_new(id, robot);

        let mut robots = self.robots.write().await;
        robots.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_robot(&self, id: RobotId) -> Result<Option<Robot>> {
        let robots = self.robots.read().await;
        Ok(robots.get(&id).cloned())
    }

    async fn update_coordinates(&self, id: RobotId, coordinates: Coordinates) -> Result<()> {
        self.modify(id, |robot| robot.coordinates = coordinates)
            .await
    }

    async fn update_name(&self, id: RobotId, name: &str) -> Result<()> {
        self.modify(id, |robot| robot.name = name.to_string()).await
    }

    async fn update_type(&self, id: RobotId, kind: &str) -> Result<()> {
        self.modify(id, |robot| robot.kind = kind.to_string()).await
    }

    async fn delete_robot(&self, id: RobotId) -> Result<()> {
        let mut robots = self.robots.write().await;
        robots
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::robot_not_found(id))
    }
}
