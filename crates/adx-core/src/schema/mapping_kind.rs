use crate::{Error, Result, Violation};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Ingestion data format an ingestion mapping applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingKind {
    Json,
}

impl MappingKind {
    /// Every supported kind, spelled the way the resource configuration accepts it.
    pub const NAMES: &'static [&'static str] = &["Json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            MappingKind::Json => "Json",
        }
    }

    /// Spelling used in management commands and resource IDs.
    pub fn as_command_str(&self) -> &'static str {
        match self {
            MappingKind::Json => "json",
        }
    }
}

impl FromStr for MappingKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("json") {
            Ok(MappingKind::Json)
        } else {
            Err(Error::validation(vec![Violation::not_one_of(
                "kind",
                s,
                Self::NAMES,
            )]))
        }
    }
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MappingKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MappingKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
