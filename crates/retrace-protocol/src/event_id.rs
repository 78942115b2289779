use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 16-byte event ID (128 bits)
///
/// Rendered as a 32-char lowercase hex string on the wire, the same shape
/// the query layer uses for event identifiers.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct EventId(pub [u8; 16]);

impl EventId {
    /// Generate a new random event ID
    pub fn new() -> Self {
        let mut bytes = [0u8; 16];
        getrandom::getrandom(&mut bytes).expect("failed to generate random event ID");
        Self(bytes)
    }

    /// Parse from hex string (32 hex chars)
    pub fn from_hex(s: &str) -> Result<Self, EventIdError> {
        if s.len() != 32 {
            return Err(EventIdError::InvalidLength);
        }
        let bytes = hex::decode(s).map_err(|_| EventIdError::InvalidHex)?;
        // length checked above, decode yields exactly 16 bytes
        let mut id = [0u8; 16];
        id.copy_from_slice(&bytes);
        Ok(Self(id))
    }

    /// Format as hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventId({})", self.to_hex())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for EventId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EventIdError {
    #[error("invalid hex encoding")]
    InvalidHex,
    #[error("invalid length")]
    InvalidLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_roundtrip() {
        let id = EventId::from_hex("0123456789abcdef0123456789abcdef").unwrap();
        assert_eq!(id.to_hex(), "0123456789abcdef0123456789abcdef");
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(
            EventId::from_hex("0123"),
            Err(EventIdError::InvalidLength)
        ));
        assert!(matches!(
            EventId::from_hex("zz23456789abcdef0123456789abcdef"),
            Err(EventIdError::InvalidHex)
        ));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let id = EventId::from_hex("a1b2c3d4e5f6789012345678901234ab").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"a1b2c3d4e5f6789012345678901234ab\"");
        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
