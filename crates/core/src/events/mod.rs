//! Change events emitted by the robot service.
//!
//! An event is a routing key from a closed vocabulary plus a payload that is
//! either a JSON robot snapshot or a human-readable description.

mod error;
mod message;
mod publisher;
mod routing;
mod text;

pub use error::{PublishError, Result};
pub use message::EventMessage;
pub use publisher::EventPublisher;
pub use routing::{ContentType, RoutingKey, UnknownContentType, UnknownRoutingKey};
pub use text::{
    coordinates_changed_text, name_changed_text, robot_deleted_text, type_changed_text,
};
