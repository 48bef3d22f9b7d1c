use serde::{Deserialize, Serialize};

use crate::events::EventMessage;

use super::{BusError, Result};

/// A message as received from a queue.
///
/// Routing key and content type stay raw strings: consumers decide what to do
/// with values they do not recognise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub routing_key: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl From<&EventMessage> for Delivery {
    fn from(message: &EventMessage) -> Self {
        Self {
            routing_key: message.routing_key.as_str().to_string(),
            content_type: Some(message.content_type.as_str().to_string()),
            body: message.body.clone(),
        }
    }
}

/// JSON envelope stored by key-value backed brokers.
///
/// Both content types are UTF-8, so the body travels as a JSON string.
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    routing_key: &'a str,
    content_type: Option<&'a str>,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct OwnedEnvelope {
    routing_key: String,
    content_type: Option<String>,
    body: String,
}

/// Encodes an event into the JSON envelope. Fails if the body is not UTF-8.
pub fn encode_envelope(message: &EventMessage) -> Result<Vec<u8>> {
    let body = std::str::from_utf8(&message.body)
        .map_err(|e| BusError::Envelope(format!("body is not UTF-8: {e}")))?;
    let envelope = Envelope {
        routing_key: message.routing_key.as_str(),
        content_type: Some(message.content_type.as_str()),
        body,
    };
    serde_json::to_vec(&envelope).map_err(|e| BusError::Envelope(e.to_string()))
}

/// Decodes a JSON envelope.
pub fn decode_envelope(bytes: &[u8]) -> Result<Delivery> {
    let envelope: OwnedEnvelope =
        serde_json::from_slice(bytes).map_err(|e| BusError::Envelope(e.to_string()))?;
    Ok(Delivery {
        routing_key: envelope.routing_key,
        content_type: envelope.content_type,
        body: envelope.body.into_bytes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ContentType, RoutingKey};

    #[test]
    fn test_envelope_keeps_headers() {
        let message = EventMessage::text("Robot with ID: 1 was destroyed", RoutingKey::Delete);

        let delivery = decode_envelope(&encode_envelope(&message).unwrap()).unwrap();

        assert_eq!(delivery.routing_key, "robots.Del");
        assert_eq!(delivery.content_type.as_deref(), Some("text/plain"));
        assert_eq!(delivery.body, message.body);
    }

    #[test]
    fn test_envelope_body_is_a_json_string() {
        let message = EventMessage::text("hi", RoutingKey::Get);

        let encoded = encode_envelope(&message).unwrap();

        assert_eq!(
            String::from_utf8(encoded).unwrap(),
            r#"{"routing_key":"robots.Get","content_type":"text/plain","body":"hi"}"#
        );
    }

    #[test]
    fn test_snapshot_body_is_embedded_as_text() {
        let message = EventMessage {
            routing_key: RoutingKey::Add,
            content_type: ContentType::Json,
            body: br#"{"id":1}"#.to_vec(),
        };

        let encoded = String::from_utf8(encode_envelope(&message).unwrap()).unwrap();

        assert!(encoded.contains(r#""body":"{\"id\":1}""#));
        assert_eq!(decode_envelope(encoded.as_bytes()).unwrap().body, message.body);
    }

    #[test]
    fn test_non_utf8_body_is_rejected() {
        let message = EventMessage {
            routing_key: RoutingKey::Delete,
            content_type: ContentType::PlainText,
            body: vec![0xff, 0xfe],
        };

        assert!(matches!(
            encode_envelope(&message),
            Err(BusError::Envelope(_))
        ));
    }

    #[test]
    fn test_envelope_without_content_type() {
        let delivery =
            decode_envelope(br#"{"routing_key":"robots.Get","content_type":null,"body":"hi"}"#)
                .unwrap();

        assert_eq!(delivery.content_type, None);
        assert_eq!(delivery.body, b"hi");
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_envelope(b"{"),
            Err(BusError::Envelope(_))
        ));
    }
}
