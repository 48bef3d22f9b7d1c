use crate::bus::Delivery;
use crate::events::ContentType;
use crate::robot::Robot;

use super::DecodeError;

/// A decoded event payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Snapshot(Robot),
    Text(String),
}

/// Decodes a delivery according to its declared content type.
pub fn decode_delivery(delivery: &Delivery) -> Result<Notification, DecodeError> {
    let content_type = delivery
        .content_type
        .as_deref()
        .ok_or(DecodeError::MissingContentType)?;

    match content_type.parse::<ContentType>() {
        Ok(ContentType::Json) => serde_json::from_slice(&delivery.body)
            .map(Notification::Snapshot)
            .map_err(|e| DecodeError::InvalidJson(e.to_string())),
        Ok(ContentType::PlainText) => String::from_utf8(delivery.body.clone())
            .map(Notification::Text)
            .map_err(|e| DecodeError::InvalidUtf8(e.to_string())),
        Err(_) => Err(DecodeError::UnsupportedContentType(
            content_type.to_string(),
        )),
    }
}
