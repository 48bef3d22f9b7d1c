use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Routing key of a robot event, one per service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingKey {
    Add,
    Get,
    UpdateCoordinates,
    UpdateName,
    UpdateType,
    Delete,
}

impl RoutingKey {
    /// Every routing key, in service operation order.
    pub const ALL: [RoutingKey; 6] = [
        RoutingKey::Add,
        RoutingKey::Get,
        RoutingKey::UpdateCoordinates,
        RoutingKey::UpdateName,
        RoutingKey::UpdateType,
        RoutingKey::Delete,
    ];

    /// The routing key as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            RoutingKey::Add => "robots.Add",
            RoutingKey::Get => "robots.Get",
            RoutingKey::UpdateCoordinates => "robots.UpdateCord",
            RoutingKey::UpdateName => "robots.UpdateName",
            RoutingKey::UpdateType => "robots.UpdateType",
            RoutingKey::Delete => "robots.Del",
        }
    }
}

impl fmt::Display for RoutingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown routing key: {0}")]
pub struct UnknownRoutingKey(pub String);

impl FromStr for RoutingKey {
    type Err = UnknownRoutingKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoutingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownRoutingKey(s.to_string()))
    }
}

/// Declared content type of an event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// A JSON robot snapshot.
    Json,
    /// UTF-8 text.
    PlainText,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::PlainText => "text/plain",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown content type: {0}")]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "application/json" => Ok(ContentType::Json),
            "text/plain" => Ok(ContentType::PlainText),
            other => Err(UnknownContentType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_key_wire_names() {
        let names: Vec<&str> = RoutingKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            [
                "robots.Add",
                "robots.Get",
                "robots.UpdateCord",
                "robots.UpdateName",
                "robots.UpdateType",
                "robots.Del"
            ]
        );
    }

    #[test]
    fn test_routing_key_parses_own_output() {
        for key in RoutingKey::ALL {
            assert_eq!(key.to_string().parse::<RoutingKey>(), Ok(key));
        }
    }

    #[test]
    fn test_routing_key_is_case_sensitive() {
        let err = "robots.add".parse::<RoutingKey>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown routing key: robots.add");
    }

    #[test]
    fn test_content_type_parse() {
        assert_eq!("application/json".parse(), Ok(ContentType::Json));
        assert_eq!("text/plain".parse(), Ok(ContentType::PlainText));
        assert_eq!(
            "application/xml".parse::<ContentType>(),
            Err(UnknownContentType("application/xml".to_string()))
        );
    }
}
