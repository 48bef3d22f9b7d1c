mod error;
mod operations;
mod requests;
mod types;

pub use error::RobotError;
pub use operations::{validate_name, validate_new_robot, validate_type};
pub use requests::{
    CreateRobotRequest, UpdateCoordinatesRequest, UpdateNameRequest, UpdateTypeRequest,
};
pub use types::{Coordinates, NewRobot, Robot, RobotId};
