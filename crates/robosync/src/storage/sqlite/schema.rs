//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
///
/// `AUTOINCREMENT` keeps SQLite from reusing the id of a deleted robot.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS robots (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    type TEXT NOT NULL,
    xcord INTEGER NOT NULL,
    ycord INTEGER NOT NULL,
    zcord INTEGER NOT NULL
);
"#;

pub const INSERT_ROBOT: &str =
    "INSERT INTO robots (name, type, xcord, ycord, zcord) VALUES (?1, ?2, ?3, ?4, ?5)";

pub const SELECT_ROBOT_BY_ID: &str =
    "SELECT id, name, type, xcord, ycord, zcord FROM robots WHERE id = ?1";

pub const UPDATE_ROBOT_COORDINATES: &str =
    "UPDATE robots SET xcord = ?2, ycord = ?3, zcord = ?4 WHERE id = ?1";

pub const UPDATE_ROBOT_NAME: &str = "UPDATE robots SET name = ?2 WHERE id = ?1";

pub const UPDATE_ROBOT_TYPE: &str = "UPDATE robots SET type = ?2 WHERE id = ?1";

pub const DELETE_ROBOT: &str = "DELETE FROM robots WHERE id = ?1";
