//! Pure decode and render steps of the notification fan-out.

mod decode;
mod error;
mod render;

pub use decode::{decode_delivery, Notification};
pub use error::DecodeError;
pub use render::render_notification;
