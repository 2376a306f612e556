use std::borrow::Borrow;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Canonical identifier for a module in a bundler report.
///
/// Bundlers emit ids either as integers (`"id": 42`) or as request strings
/// (`"id": "./src/index.js"`). Both collapse into one textual key at the
/// ingestion boundary, so `42` and `"42"` name the same module and nothing
/// downstream has to compare mixed representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(String);

impl ModuleId {
    /// Create a module identifier from its textual form.
    pub fn new(id: impl Into<String>) -> Result<Self, ModuleIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ModuleIdError::Empty);
        }
        Ok(Self(id))
    }

    /// Create a module identifier from a numeric id.
    pub fn from_number(id: i64) -> Self {
        Self(id.to_string())
    }

    /// Borrow the canonical text of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<i64> for ModuleId {
    fn from(id: i64) -> Self {
        Self::from_number(id)
    }
}

impl Serialize for ModuleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ModuleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ModuleIdVisitor)
    }
}

/// Accepts both integer and string ids and canonicalises them.
struct ModuleIdVisitor;

impl Visitor<'_> for ModuleIdVisitor {
    type Value = ModuleId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a module id (integer or non-empty string)")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(ModuleId::from_number(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(ModuleId(value.to_string()))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        ModuleId::new(value).map_err(E::custom)
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        ModuleId::new(value).map_err(E::custom)
    }
}

/// Error type for `ModuleId` construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleIdError {
    /// The provided id text was empty.
    #[error("module id is empty")]
    Empty,
}
