//! Custom URI serialization: URIs serialize as their string form and
//! are re-validated on deserialization.

use crate::uri::{ChainUri, ContentUri, Source};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for ChainUri {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(s)
    }
}

impl<'de> Deserialize<'de> for ChainUri {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(d)?;
        string.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for ContentUri {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(s)
    }
}

impl<'de> Deserialize<'de> for ContentUri {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(d)?;
        string.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for Source {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(s)
    }
}

impl<'de> Deserialize<'de> for Source {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(d)?;
        Ok(Source::classify(string))
    }
}
