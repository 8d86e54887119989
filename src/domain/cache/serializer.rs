//! Value serialization strategies for cache regions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::DomainError;

/// Supported value serialization strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SerializerKind {
    /// Opaque binary encoding of arbitrary values
    #[default]
    GenericBinary,
    /// Human-readable structured encoding
    Json,
    /// Plain UTF-8 text
    String,
}

impl SerializerKind {
    /// Canonical identifier used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GenericBinary => "generic-binary",
            Self::Json => "json",
            Self::String => "string",
        }
    }

    /// Media type of the stored representation
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::GenericBinary => "application/octet-stream",
            Self::Json => "application/json",
            Self::String => "text/plain",
        }
    }
}

impl fmt::Display for SerializerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SerializerKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic-binary" | "generic_binary" | "binary" | "jdk" => Ok(Self::GenericBinary),
            "json" | "generic-json" | "generic_json" => Ok(Self::Json),
            "string" | "text" => Ok(Self::String),
            _ => Err(DomainError::configuration(format!(
                "Unknown serializer: {}. Valid serializers: generic-binary, json, string",
                s
            ))),
        }
    }
}

impl Serialize for SerializerKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SerializerKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
