use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Stable slug identifier for a kotowaza entry (e.g., `nanakorobi-yaoki`).
///
/// The slug doubles as the path segment in jepang.org URLs, so it stays
/// lowercase ASCII with hyphens.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JLPT difficulty classification for an entry.
///
/// Known variants keep serialization consistent; `Other` preserves forward
/// compatibility with datasets that classify outside N5..N1.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
    Other(String),
}

impl Serialize for JlptLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JlptLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

impl JlptLevel {
    pub fn as_str(&self) -> &str {
        match self {
            JlptLevel::N5 => "N5",
            JlptLevel::N4 => "N4",
            JlptLevel::N3 => "N3",
            JlptLevel::N2 => "N2",
            JlptLevel::N1 => "N1",
            JlptLevel::Other(value) => value.as_str(),
        }
    }

    /// Parse a level label, normalizing case to the canonical upper-case form.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "N5" => JlptLevel::N5,
            "N4" => JlptLevel::N4,
            "N3" => JlptLevel::N3,
            "N2" => JlptLevel::N2,
            "N1" => JlptLevel::N1,
            other => JlptLevel::Other(other.to_string()),
        }
    }
}
