pub mod error;
pub mod health;
pub mod robots;

pub use error::{AppError, BadRequest};
