//! SQLite row conversion functions.

use rusqlite::Row;

use robosync_core::robot::{Coordinates, Robot};

/// Convert a SQLite row to a Robot.
///
/// Expected columns: id, name, type, xcord, ycord, zcord
pub fn row_to_robot(row: &Row) -> rusqlite::Result<Robot> {
    Ok(Robot {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
        coordinates: Coordinates {
            x: row.get(3)?,
            y: row.get(4)?,
            z: row.get(5)?,
        },
    })
}
