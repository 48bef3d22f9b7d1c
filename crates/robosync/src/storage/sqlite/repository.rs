//! SQLite repository implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use robosync_core::robot::{Coordinates, NewRobot, Robot, RobotId};
use robosync_core::storage::{RepositoryError, Result, RobotRepository};

use super::conversions::row_to_robot;
use super::error::map_tokio_rusqlite_error_with_id;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Turns "no row changed" into a not-found error.
fn expect_changed(rows: usize) -> std::result::Result<(), tokio_rusqlite::Error> {
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// SQLite-based robot repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and ensures the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl RobotRepository for SqliteRepository {
    async fn create_robot(&self, robot: &NewRobot) -> Result<Robot> {
        let new_robot = robot.clone();

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ROBOT,
                    rusqlite::params![
                        new_robot.name,
                        new_robot.kind,
                        new_robot.coordinates.x,
                        new_robot.coordinates.y,
                        new_robot.coordinates.z
                    ],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "new"))?;

        tracing::debug!(robot_id = id, "Robot row inserted");
        Ok(Robot::from_new(id, robot))
    }

    async fn get_robot(&self, id: RobotId) -> Result<Option<Robot>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ROBOT_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_robot) {
                    Ok(robot) => Ok(Some(robot)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }

    async fn update_coordinates(&self, id: RobotId, coordinates: Coordinates) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_ROBOT_COORDINATES,
                        rusqlite::params![id, coordinates.x, coordinates.y, coordinates.z],
                    )
                    .map_err(wrap_err)?;
                expect_changed(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }

    async fn update_name(&self, id: RobotId, name: &str) -> Result<()> {
        let name = name.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_ROBOT_NAME, rusqlite::params![id, name])
                    .map_err(wrap_err)?;
                expect_changed(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }

    async fn update_type(&self, id: RobotId, kind: &str) -> Result<()> {
        let kind = kind.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_ROBOT_TYPE, rusqlite::params![id, kind])
                    .map_err(wrap_err)?;
                expect_changed(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }

    async fn delete_robot(&self, id: RobotId) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_ROBOT, [id])
                    .map_err(wrap_err)?;
                expect_changed(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }
}
